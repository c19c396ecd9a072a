//! Gemini adapter
//!
//! reqwest implementation of the generation service port.

pub mod client;

pub use client::GeminiClient;
