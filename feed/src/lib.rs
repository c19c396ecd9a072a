//! myfeed
//!
//! Grounded news summaries for a desktop feed panel. A list of interest
//! topics goes to Gemini with Google Search grounding enabled; the answer
//! comes back with its grounding supports spliced in as inline markdown
//! citation links.
//!
//! Uses hexagonal (ports & adapters) architecture:
//! - `domain`: entities and port traits
//! - `app`: citation splicing and the feed service
//! - `adapters`: Gemini HTTP client, interest file loader
//! - `render`: the safe markdown subset shown by display surfaces

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;

#[cfg(test)]
mod test_utils;

pub use adapters::{FileInterestSource, GeminiClient};
pub use app::{splice_citations, FeedService};
pub use config::Config;
pub use domain::entities::{Chunk, GroundedText, InterestList, Support};
pub use domain::ports::{DisplaySurface, GenerationService, InterestSource};
pub use error::{ConfigError, FeedError, GenerationError, GroundingError, InterestError};
