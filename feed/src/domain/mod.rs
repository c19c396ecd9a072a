//! Domain layer
//!
//! Contains pure data and the seams to the outside world.
//! - `entities`: Domain models for interests and grounded text
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
