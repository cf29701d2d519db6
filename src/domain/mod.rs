//! Domain layer containing business entities and the storage contract.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod repositories;
