//! Terminal "My Feed" panel
//!
//! A display surface that draws a titled panel on a terminal stream. The
//! body goes through the safe markdown renderer, so citation markers show
//! up as clickable links in terminals that support OSC 8.

use std::io::{self, Write};

use myfeed::render::{render_terminal, Style};
use myfeed::DisplaySurface;

pub const TITLE: &str = "My Feed";

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub struct TerminalPanel<W: Write> {
    out: W,
    width: usize,
    style: Style,
}

impl<W: Write> TerminalPanel<W> {
    pub fn new(out: W, width: usize, style: Style) -> Self {
        Self {
            out,
            width: width.max(TITLE.len()),
            style,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn header(&self) -> String {
        let pad = (self.width - TITLE.len()) / 2;
        let title = match self.style {
            Style::Ansi => format!("\x1b[1m{}\x1b[22m", TITLE),
            Style::Plain => TITLE.to_string(),
        };
        format!("{}{}\n{}\n", " ".repeat(pad), title, "─".repeat(self.width))
    }

    fn draw(&mut self, text: &str) -> io::Result<()> {
        let header = self.header();
        let body = render_terminal(text, self.style);
        write!(self.out, "{}\n{}\n", header, body)?;
        self.out.flush()
    }
}

impl<W: Write> DisplaySurface for TerminalPanel<W> {
    fn render(&mut self, text: &str) -> io::Result<()> {
        self.draw(text)
    }

    fn update_content(&mut self, text: &str) -> io::Result<()> {
        match self.style {
            Style::Ansi => self.out.write_all(CLEAR_SCREEN.as_bytes())?,
            Style::Plain => self.out.write_all(b"\n")?,
        }
        self.draw(text)
    }
}
