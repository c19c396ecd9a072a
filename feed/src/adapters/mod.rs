//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod gemini;
pub mod interests;

pub use gemini::GeminiClient;
pub use interests::FileInterestSource;
