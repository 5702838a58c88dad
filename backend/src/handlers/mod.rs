//! HTTP handlers for the IrriSmart API

pub mod analytics;
pub mod health;

pub use analytics::*;
pub use health::*;
