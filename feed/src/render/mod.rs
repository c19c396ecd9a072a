//! Rendering of the feed body for display surfaces

pub mod markdown;

pub use markdown::{render_terminal, Style};
