//! Domain entities
//!
//! Request-scoped models. Nothing here is persisted.

pub mod grounding;
pub mod interests;

pub use grounding::{Chunk, GroundedText, Support};
pub use interests::{InterestList, DEFAULT_INTERESTS};
