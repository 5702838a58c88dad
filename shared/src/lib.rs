//! Shared types and models for the IrriSmart irrigation platform
//!
//! This crate contains the domain vocabulary produced by the analytics
//! pipeline and consumed by the HTTP layer and any other client.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
