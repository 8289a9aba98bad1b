use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shared::CommonError;

use crate::media::MediaError;

/// Handler error. Renders as `{"message": ..., "status": ...}`.
#[derive(Debug)]
pub struct AppError(pub CommonError);

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(entity: &str) -> Self {
        AppError(CommonError::NotFound(entity.to_string()))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError(CommonError::ValidationFailed(message.into()))
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        AppError(CommonError::AuthenticationFailed(message.into()))
    }

    /// Request the framework refused before a handler ran
    fn rejected(status: StatusCode, message: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            AppError(CommonError::PayloadTooLarge(message))
        } else {
            AppError::bad_request(message)
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<CommonError> for AppError {
    fn from(err: CommonError) -> Self {
        AppError(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError(CommonError::from(err))
    }
}

impl From<MediaError> for AppError {
    fn from(err: MediaError) -> Self {
        AppError(CommonError::ExternalService(format!("Upload failed: {}", err)))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::bad_request(err.to_string())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError(CommonError::PayloadTooLarge(err.body_text()))
        } else {
            AppError::bad_request(format!("Invalid multipart body: {}", err.body_text()))
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::rejected(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, self.0);
        }

        let body = Json(json!({
            "message": self.0.public_message(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
