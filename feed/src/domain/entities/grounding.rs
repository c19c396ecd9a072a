//! Grounding domain entities
//!
//! The typed view of a grounded generation: the generated text plus the
//! supports that tie spans of it to citable sources. Offsets always refer
//! to the text as generated, before any citation is spliced in.

use serde::{Deserialize, Serialize};

/// "The text up to `end_index` is supported by these sources."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Support {
    /// UTF-8 byte offset into the original text
    pub end_index: usize,
    /// Zero-based indices into the chunk list, in citation order
    pub source_indices: Vec<usize>,
}

impl Support {
    pub fn new(end_index: usize, source_indices: Vec<usize>) -> Self {
        Self {
            end_index,
            source_indices,
        }
    }
}

/// A single citable source
///
/// The URI is only required once a support actually cites the chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub source_uri: Option<String>,
}

impl Chunk {
    pub fn new(source_uri: impl Into<String>) -> Self {
        Self {
            source_uri: Some(source_uri.into()),
        }
    }

    /// A chunk upstream returned without a web URI
    pub fn without_uri() -> Self {
        Self { source_uri: None }
    }
}

/// Generated text together with its grounding
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroundedText {
    pub text: String,
    pub supports: Vec<Support>,
    pub chunks: Vec<Chunk>,
}
