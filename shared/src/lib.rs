//! Shared utilities and types for the Aakrittii backend services

// Re-export common dependencies
pub use anyhow;
pub use chrono;
pub use serde;
pub use serde_json;
pub use thiserror;
pub use tracing;

pub mod database;
pub mod observability;
pub mod types;

pub use types::error::CommonError;

pub type Result<T> = std::result::Result<T, CommonError>;
