//! Test fixtures
//!
//! Factory functions for building Gemini responses with sensible defaults.

use crate::domain::ports::{
    Candidate, Content, GenerateContentResponse, GroundingChunk, GroundingMetadata,
    GroundingSupport, Part, Segment, WebChunk,
};

/// A single-candidate model answer with no grounding attached
pub fn ungrounded_response(text: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(Content {
                role: Some("model".to_string()),
                parts: vec![Part {
                    text: Some(text.to_string()),
                    thought: None,
                }],
            }),
            finish_reason: Some("STOP".to_string()),
            grounding_metadata: None,
        }],
        model_version: Some("gemini-2.5-flash".to_string()),
    }
}

/// A single-candidate answer grounded by `supports` as (end index, chunk
/// indices) pairs, citing `uris` in order.
pub fn grounded_response(
    text: &str,
    supports: &[(i64, &[i64])],
    uris: &[&str],
) -> GenerateContentResponse {
    let mut response = ungrounded_response(text);
    response.candidates[0].grounding_metadata = Some(GroundingMetadata {
        web_search_queries: vec!["latest news".to_string()],
        grounding_chunks: uris
            .iter()
            .map(|uri| GroundingChunk {
                web: Some(WebChunk {
                    uri: Some(uri.to_string()),
                    title: None,
                }),
            })
            .collect(),
        grounding_supports: supports
            .iter()
            .map(|(end, indices)| GroundingSupport {
                segment: Some(Segment {
                    start_index: None,
                    end_index: Some(*end),
                    text: None,
                }),
                grounding_chunk_indices: indices.to_vec(),
                confidence_scores: Vec::new(),
            })
            .collect(),
    });
    response
}
