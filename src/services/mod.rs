//! External Services
//!
//! This module contains services that interact with external systems:
//! - api: background worker that runs REST calls off the UI thread

pub mod api;

// Re-export commonly used types for convenience
pub use api::{ApiRequest, ApiResponse};
