//! Safe markdown subset
//!
//! The feed body is model output, so only three constructs are honoured:
//! paragraphs (separated by blank lines), `**bold**` and `[label](url)`
//! links. Everything else is shown as literal text. Control characters are
//! dropped before parsing so model text cannot smuggle terminal escapes.

/// An inline run of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
    Link { label: String, url: String },
}

/// A block of lines, each a run of spans
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub lines: Vec<Vec<Span>>,
}

/// How spans are turned into terminal text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// ANSI bold and OSC 8 hyperlinks
    Ansi,
    /// No escapes at all; links print as `label <url>`
    Plain,
}

/// Drop every control character except newline and tab.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|&c| !c.is_control() || c == '\n' || c == '\t')
        .collect()
}

/// Split sanitized text into paragraphs of parsed lines.
pub fn parse(text: &str) -> Vec<Paragraph> {
    let clean = sanitize(text);
    let mut paragraphs = Vec::new();
    let mut current = Paragraph::default();

    for line in clean.lines() {
        if line.trim().is_empty() {
            if !current.lines.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.lines.push(parse_line(line));
    }
    if !current.lines.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

/// Parse one line into spans. Malformed markup stays literal.
pub fn parse_line(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut text = String::new();
    let mut rest = line;

    while let Some(c) = rest.chars().next() {
        if let Some((span, consumed)) = bold_at(rest).or_else(|| link_at(rest)) {
            if !text.is_empty() {
                spans.push(Span::Text(std::mem::take(&mut text)));
            }
            spans.push(span);
            rest = &rest[consumed..];
        } else {
            text.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    if !text.is_empty() {
        spans.push(Span::Text(text));
    }

    spans
}

fn bold_at(s: &str) -> Option<(Span, usize)> {
    let inner = s.strip_prefix("**")?;
    let end = inner.find("**")?;
    if end == 0 {
        return None;
    }
    Some((Span::Bold(inner[..end].to_string()), end + 4))
}

fn link_at(s: &str) -> Option<(Span, usize)> {
    let inner = s.strip_prefix('[')?;
    let label_end = inner.find(']')?;
    let label = &inner[..label_end];
    let after = inner[label_end + 1..].strip_prefix('(')?;
    let url_end = after.find(')')?;
    let url = &after[..url_end];

    if label.is_empty() || label.contains('[') || url.is_empty() || url.contains(char::is_whitespace)
    {
        return None;
    }

    // '[' + label + "](" + url + ')'
    let consumed = 1 + label_end + 2 + url_end + 1;
    Some((
        Span::Link {
            label: label.to_string(),
            url: url.to_string(),
        },
        consumed,
    ))
}

/// Only web links become clickable.
pub fn is_web_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

/// Render `text` for a terminal.
pub fn render_terminal(text: &str, style: Style) -> String {
    let mut buf = String::new();

    for (i, paragraph) in parse(text).iter().enumerate() {
        if i > 0 {
            buf.push_str("\n\n");
        }
        for (j, line) in paragraph.lines.iter().enumerate() {
            if j > 0 {
                buf.push('\n');
            }
            for span in line {
                render_span(&mut buf, span, style);
            }
        }
    }

    buf
}

fn render_span(buf: &mut String, span: &Span, style: Style) {
    match (span, style) {
        (Span::Text(t), _) => buf.push_str(t),
        (Span::Bold(t), Style::Ansi) => {
            buf.push_str("\x1b[1m");
            buf.push_str(t);
            buf.push_str("\x1b[22m");
        }
        (Span::Bold(t), Style::Plain) => buf.push_str(t),
        (Span::Link { label, url }, _) if !is_web_url(url) => buf.push_str(label),
        (Span::Link { label, url }, Style::Ansi) => {
            buf.push_str(&format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, label));
        }
        (Span::Link { label, url }, Style::Plain) => {
            buf.push_str(&format!("{} <{}>", label, url));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Span {
        Span::Text(s.to_string())
    }

    fn link(label: &str, url: &str) -> Span {
        Span::Link {
            label: label.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn parses_bold_and_links() {
        let spans = parse_line("**Tech:** chips ship.[1](https://a.example), [3](https://c.example)");
        assert_eq!(
            spans,
            vec![
                Span::Bold("Tech:".to_string()),
                text(" chips ship."),
                link("1", "https://a.example"),
                text(", "),
                link("3", "https://c.example"),
            ]
        );
    }

    #[test]
    fn unclosed_bold_is_literal() {
        assert_eq!(parse_line("**open"), vec![text("**open")]);
    }

    #[test]
    fn empty_bold_is_literal() {
        assert_eq!(parse_line("a **** b"), vec![text("a **** b")]);
    }

    #[test]
    fn malformed_links_are_literal() {
        assert_eq!(parse_line("[1] (x)"), vec![text("[1] (x)")]);
        assert_eq!(parse_line("[](http://x)"), vec![text("[](http://x)")]);
        assert_eq!(parse_line("[a](has space)"), vec![text("[a](has space)")]);
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let paragraphs = parse("first\nsecond line\n\n\nthird");
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].lines.len(), 2);
        assert_eq!(paragraphs[1].lines, vec![vec![text("third")]]);
    }

    #[test]
    fn escapes_are_stripped() {
        assert_eq!(sanitize("a\x1b[31mred\x07\r\n\tb"), "a[31mred\n\tb");
    }

    #[test]
    fn ansi_rendering_uses_bold_and_hyperlinks() {
        let out = render_terminal("**Hi** there.[1](https://x.example)", Style::Ansi);
        assert_eq!(
            out,
            "\x1b[1mHi\x1b[22m there.\x1b]8;;https://x.example\x1b\\1\x1b]8;;\x1b\\"
        );
    }

    #[test]
    fn plain_rendering_has_no_escapes() {
        let out = render_terminal("**Hi**\n\nsee [1](https://x.example)", Style::Plain);
        assert_eq!(out, "Hi\n\nsee 1 <https://x.example>");
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn non_web_links_render_as_label() {
        let out = render_terminal("[click](javascript:alert(1))", Style::Ansi);
        assert!(!out.contains("javascript"));
    }

    #[test]
    fn other_markdown_passes_through() {
        let out = render_terminal("## Heading\n* item", Style::Plain);
        assert_eq!(out, "## Heading\n* item");
    }
}
