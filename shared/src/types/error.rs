//! Common error types for Aakrittii services

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommonError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CommonError {
    pub fn http_status_code(&self) -> u16 {
        match self {
            CommonError::ValidationFailed(_) => 400,
            CommonError::AuthenticationFailed(_) => 401,
            CommonError::NotFound(_) => 404,
            CommonError::AlreadyExists(_) => 409,
            CommonError::PayloadTooLarge(_) => 413,
            _ => 500,
        }
    }

    /// Message safe to hand back to a client.
    ///
    /// Database and internal failures are masked; media host failures keep
    /// their message so an operator can see why an upload was rejected.
    pub fn public_message(&self) -> String {
        match self {
            CommonError::ValidationFailed(msg)
            | CommonError::AuthenticationFailed(msg)
            | CommonError::AlreadyExists(msg)
            | CommonError::PayloadTooLarge(msg)
            | CommonError::ExternalService(msg) => msg.clone(),
            CommonError::NotFound(_) => self.to_string(),
            CommonError::Database(_) | CommonError::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl From<sqlx::Error> for CommonError {
    fn from(err: sqlx::Error) -> Self {
        CommonError::Database(err.to_string())
    }
}

impl From<std::io::Error> for CommonError {
    fn from(err: std::io::Error) -> Self {
        CommonError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_codes() {
        assert_eq!(CommonError::NotFound("Pillar".to_string()).http_status_code(), 404);
        assert_eq!(CommonError::AuthenticationFailed("test".to_string()).http_status_code(), 401);
        assert_eq!(CommonError::ValidationFailed("test".to_string()).http_status_code(), 400);
        assert_eq!(CommonError::ExternalService("test".to_string()).http_status_code(), 500);
    }

    #[test]
    fn test_not_found_message_names_entity() {
        let err = CommonError::NotFound("Press Release".to_string());
        assert_eq!(err.public_message(), "Press Release not found");
    }

    #[test]
    fn test_internal_details_are_masked() {
        let err = CommonError::Database("no such table: pillars".to_string());
        assert_eq!(err.public_message(), "Internal server error");

        let err = CommonError::ExternalService("Invalid Signature".to_string());
        assert_eq!(err.public_message(), "Invalid Signature");
    }
}
