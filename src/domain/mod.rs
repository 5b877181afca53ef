//! Domain layer containing catalogue entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Programmes, categories, ownership and attached resources
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Mapping to external documents lives in [`crate::api::mappers`]

pub mod entities;
pub mod repositories;
