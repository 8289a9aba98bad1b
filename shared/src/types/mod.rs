//! Shared type definitions for the Aakrittii services

pub mod error;

use serde::Serialize;

/// Plain `{"message": ...}` acknowledgement returned by update/delete endpoints.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn updated() -> Self {
        Self::new("Updated")
    }

    pub fn deleted() -> Self {
        Self::new("Deleted")
    }
}
