//! Error types for the feed core
//!
//! One error type per layer:
//! - `GenerationError`: Gemini API client errors
//! - `GroundingError`: grounding metadata that violates the splicer's preconditions
//! - `InterestError`: interest list loading errors
//! - `ConfigError`: environment configuration errors
//! - `FeedError`: what `FeedService` returns (wraps the layers above)
//!
//! Nothing in the core retries or degrades. Every error reaches the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Gemini API client errors
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("API key contains characters not allowed in an HTTP header")]
    InvalidApiKey,

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid API key")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// The generation service answered, but not in the shape the splicer needs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroundingError {
    #[error("Response has no candidates")]
    NoCandidates,

    #[error("Candidate 0 has no text")]
    MissingText,

    #[error("Candidate 0 has no grounding metadata")]
    MissingMetadata,

    #[error("Grounding support {support} has no segment end index")]
    MissingSegment { support: usize },

    #[error("Grounding chunk {chunk} has no web URI")]
    MissingChunkUri { chunk: usize },

    #[error("Grounding support {support} has a negative index: {value}")]
    NegativeIndex { support: usize, value: i64 },

    #[error("Segment end {end_index} is outside the text ({len} bytes) or splits a character")]
    SegmentOutOfBounds { end_index: usize, len: usize },
}

/// Interest list loading errors
#[derive(Debug, Error)]
pub enum InterestError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Errors returned by a feed fetch
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Malformed grounding metadata: {0}")]
    Grounding(#[from] GroundingError),

    #[error("Interest list error: {0}")]
    Interests(#[from] InterestError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grounding_error_wraps_into_feed_error() {
        let err: FeedError = GroundingError::MissingMetadata.into();
        assert!(matches!(err, FeedError::Grounding(GroundingError::MissingMetadata)));
        assert_eq!(
            err.to_string(),
            "Malformed grounding metadata: Candidate 0 has no grounding metadata"
        );
    }

    #[test]
    fn api_error_message_includes_status() {
        let err = GenerationError::Api {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 503 - overloaded");
    }

    #[test]
    fn invalid_api_key_is_not_an_auth_rejection() {
        assert_eq!(
            GenerationError::InvalidApiKey.to_string(),
            "API key contains characters not allowed in an HTTP header"
        );
    }

    #[test]
    fn config_error_names_the_key() {
        assert_eq!(
            ConfigError::Missing("GEMINI_API_KEY").to_string(),
            "GEMINI_API_KEY must be set"
        );
    }
}
