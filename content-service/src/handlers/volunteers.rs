use axum::{extract::State, Json};
use shared::types::MessageResponse;
use validator::Validate;

use super::extract::{ApiJson, ApiPath};
use crate::db::repository::volunteer;
use crate::error::{AppError, AppResult};
use crate::models::{CreateVolunteerRequest, Volunteer};
use crate::AppState;

pub async fn list_volunteers(State(state): State<AppState>) -> AppResult<Json<Vec<Volunteer>>> {
    Ok(Json(volunteer::list_volunteers(&state.db).await?))
}

/// Public volunteer application form
pub async fn submit_application(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateVolunteerRequest>,
) -> AppResult<Json<MessageResponse>> {
    req.validate()?;
    volunteer::create_volunteer(&state.db, &req).await?;
    Ok(Json(MessageResponse::new("Application Submitted")))
}

pub async fn delete_volunteer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<MessageResponse>> {
    if !volunteer::delete_volunteer(&state.db, id).await? {
        return Err(AppError::not_found("Volunteer"));
    }
    Ok(Json(MessageResponse::deleted()))
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_application_flow() {
        let (_, app) = test_app(no_uploads()).await;

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/volunteers",
                json!({
                    "name": "Asha",
                    "email": "asha@example.org",
                    "phone": "9876543210",
                    "message": "Weekends",
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Application Submitted" }));

        let (_, listed) = send(&app, empty_request("GET", "/api/volunteers")).await;
        assert_eq!(listed[0]["name"], "Asha");
        let uri = format!("/api/volunteers/{}", listed[0]["id"]);

        let (status, _) = send(&app, empty_request("DELETE", &uri)).await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = send(&app, empty_request("DELETE", &uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Volunteer not found");
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected() {
        let (_, app) = test_app(no_uploads()).await;
        let (status, _) = send(
            &app,
            json_request(
                "POST",
                "/api/volunteers",
                json!({ "name": "Asha", "email": "nope", "phone": "1", "message": "" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
