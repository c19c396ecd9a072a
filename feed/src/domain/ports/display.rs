//! Display surface port trait
//!
//! Whatever shows the feed to the user. Text handed over is the spliced
//! feed: a small markdown subset of paragraphs, `**bold**` and
//! `[label](url)` links.

use std::io;

pub trait DisplaySurface {
    /// Draw the surface for the first time with `text` as its body
    fn render(&mut self, text: &str) -> io::Result<()>;

    /// Replace the body of an already rendered surface
    fn update_content(&mut self, text: &str) -> io::Result<()>;
}
