//! # API Shared
//!
//! Shared definitions for the care plan APIs.
//!
//! Contains:
//! - Request/response types with OpenAPI schemas (`types` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the workspace runner.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
