//! Generation service port trait
//!
//! Defines the interface for the hosted grounded-generation API (Gemini),
//! along with the request/response wire types it speaks.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::{Chunk, GroundedText, Support};
use crate::error::{GenerationError, GroundingError};

/// Helper to deserialize null as default (empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Request
// ============================================================================

/// Body of a `generateContent` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

impl GenerateContentRequest {
    /// A single user turn with Google Search grounding enabled
    pub fn grounded(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::user(prompt)],
            tools: vec![Tool::google_search()],
        }
    }

    pub fn has_google_search(&self) -> bool {
        self.tools.iter().any(|t| t.google_search.is_some())
    }

    /// Text of the first user turn
    pub fn prompt(&self) -> Option<&str> {
        self.contents
            .first()
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

/// Content of one turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(text.into()),
                thought: None,
            }],
        }
    }
}

/// A single part within content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Set on reasoning parts, which are not part of the answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

/// A tool made available to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(rename = "googleSearch")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<GoogleSearch>,
}

impl Tool {
    pub fn google_search() -> Self {
        Self {
            google_search: Some(GoogleSearch {}),
        }
    }
}

/// Google Search grounding. Serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GoogleSearch {}

// ============================================================================
// Response
// ============================================================================

/// Response of a `generateContent` call
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "modelVersion")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Answer text of the first candidate: its non-thought text parts, joined.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let texts: Vec<&str> = content
            .parts
            .iter()
            .filter(|p| p.thought != Some(true))
            .filter_map(|p| p.text.as_deref())
            .collect();

        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

/// A single response candidate
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(rename = "finishReason")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    #[serde(rename = "groundingMetadata")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// Grounding attached to a candidate when search was used
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroundingMetadata {
    #[serde(rename = "webSearchQueries")]
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub web_search_queries: Vec<String>,
    #[serde(rename = "groundingChunks")]
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub grounding_chunks: Vec<GroundingChunk>,
    #[serde(rename = "groundingSupports")]
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub grounding_supports: Vec<GroundingSupport>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroundingChunk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<WebChunk>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WebChunk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroundingSupport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<Segment>,
    #[serde(rename = "groundingChunkIndices")]
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub grounding_chunk_indices: Vec<i64>,
    #[serde(rename = "confidenceScores")]
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub confidence_scores: Vec<f64>,
}

/// Span of the answer text. Offsets are UTF-8 bytes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "startIndex")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<i64>,
    #[serde(rename = "endIndex")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Only `candidates[0]` is read.
impl TryFrom<&GenerateContentResponse> for GroundedText {
    type Error = GroundingError;

    fn try_from(response: &GenerateContentResponse) -> Result<Self, Self::Error> {
        let candidate = response
            .candidates
            .first()
            .ok_or(GroundingError::NoCandidates)?;
        let text = response.text().ok_or(GroundingError::MissingText)?;
        let metadata = candidate
            .grounding_metadata
            .as_ref()
            .ok_or(GroundingError::MissingMetadata)?;

        let supports = metadata
            .grounding_supports
            .iter()
            .enumerate()
            .map(|(i, support)| support_from_wire(i, support))
            .collect::<Result<Vec<_>, _>>()?;

        let chunks = metadata
            .grounding_chunks
            .iter()
            .map(|chunk| Chunk {
                source_uri: chunk.web.as_ref().and_then(|web| web.uri.clone()),
            })
            .collect();

        Ok(GroundedText {
            text,
            supports,
            chunks,
        })
    }
}

fn support_from_wire(index: usize, support: &GroundingSupport) -> Result<Support, GroundingError> {
    let end_index = support
        .segment
        .as_ref()
        .and_then(|s| s.end_index)
        .ok_or(GroundingError::MissingSegment { support: index })?;

    let to_usize = |value: i64| {
        usize::try_from(value).map_err(|_| GroundingError::NegativeIndex {
            support: index,
            value,
        })
    };

    let source_indices = support
        .grounding_chunk_indices
        .iter()
        .map(|&i| to_usize(i))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Support::new(to_usize(end_index)?, source_indices))
}

/// Outbound grounded generation
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Issue one `generateContent` call against `model`
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError>;
}
