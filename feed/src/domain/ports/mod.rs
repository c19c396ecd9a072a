//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod display;
pub mod generation;
pub mod interests;

pub use display::DisplaySurface;
pub use generation::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationService,
    GoogleSearch, GroundingChunk, GroundingMetadata, GroundingSupport, Part, Segment, Tool,
    WebChunk,
};
pub use interests::InterestSource;
