//! Citation splicer
//!
//! Inlines grounding citations into generated text as markdown links,
//! e.g. `Sun rises.[1](http://x) Moon sets.`
//!
//! Supports carry offsets into the text as it was generated. Inserting a
//! marker shifts everything after it, so supports are applied from the
//! highest `end_index` down: each insertion only moves text that has
//! already been handled.

use crate::domain::entities::{Chunk, Support};
use crate::error::GroundingError;

/// Build the marker for one support: `[n](uri)` per source, joined by `", "`.
///
/// Indices with no matching chunk are skipped without complaint. Upstream
/// occasionally references chunks it did not return. A cited chunk that
/// exists but has no URI is malformed metadata.
pub fn citation_marker(
    source_indices: &[usize],
    chunks: &[Chunk],
) -> Result<String, GroundingError> {
    let mut links = Vec::with_capacity(source_indices.len());
    for &i in source_indices {
        let Some(chunk) = chunks.get(i) else {
            continue;
        };
        let uri = chunk
            .source_uri
            .as_deref()
            .ok_or(GroundingError::MissingChunkUri { chunk: i })?;
        links.push(format!("[{}]({})", i + 1, uri));
    }
    Ok(links.join(", "))
}

/// Splice a citation marker into `text` at every support's `end_index`.
///
/// `supports` is not reordered in place; a sorted working copy is used.
/// Ties on `end_index` keep their given order, so for equal offsets the
/// marker of the later support ends up first in the output.
///
/// Supports without sources are skipped entirely, offset included. For the
/// rest, every offset and marker is checked before the first insertion, so
/// an offset past the end of `text`, one inside a multi-byte character, or
/// a cited chunk without a URI fails the whole splice.
pub fn splice_citations(
    text: &str,
    supports: &[Support],
    chunks: &[Chunk],
) -> Result<String, GroundingError> {
    let mut ordered: Vec<&Support> = supports
        .iter()
        .filter(|s| !s.source_indices.is_empty())
        .collect();
    // sort_by is stable
    ordered.sort_by(|a, b| b.end_index.cmp(&a.end_index));

    let mut insertions = Vec::with_capacity(ordered.len());
    for support in ordered {
        if !text.is_char_boundary(support.end_index) {
            return Err(GroundingError::SegmentOutOfBounds {
                end_index: support.end_index,
                len: text.len(),
            });
        }
        insertions.push((
            support.end_index,
            citation_marker(&support.source_indices, chunks)?,
        ));
    }

    let mut spliced = text.to_string();
    for (end_index, marker) in insertions {
        spliced.insert_str(end_index, &marker);
    }

    tracing::trace!(
        supports = supports.len(),
        added_bytes = spliced.len() - text.len(),
        "Spliced citations"
    );

    Ok(spliced)
}
