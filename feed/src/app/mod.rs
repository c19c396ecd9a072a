//! Application layer
//!
//! Contains use cases and service orchestration.

pub mod citation_splicer;
pub mod feed_service;

pub use citation_splicer::{citation_marker, splice_citations};
pub use feed_service::{build_prompt, FeedService};
