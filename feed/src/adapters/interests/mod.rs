//! Interest list adapter

pub mod file_source;

pub use file_source::{FileInterestSource, INTERESTS_FILE};
