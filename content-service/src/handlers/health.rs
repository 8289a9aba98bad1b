use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let database_up = shared::database::health_check(&state.db).await;
    let status = if database_up {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if database_up { "healthy" } else { "degraded" },
            "service": "content-service",
            "version": env!("CARGO_PKG_VERSION"),
            "database": if database_up { "up" } else { "down" },
        })),
    )
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{empty_request, no_uploads, send, test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_healthy() {
        let (_, app) = test_app(no_uploads()).await;
        let (status, body) = send(&app, empty_request("GET", "/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "up");
    }

    #[tokio::test]
    async fn test_degraded_when_database_closed() {
        let (state, app) = test_app(no_uploads()).await;
        state.db.close().await;

        let (status, body) = send(&app, empty_request("GET", "/health")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "degraded");
    }
}
