// Request extractors whose rejections render through `AppError`

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Multipart, Request},
};

use crate::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

pub struct ApiMultipart(pub Multipart);

#[async_trait]
impl<S> FromRequest<S> for ApiMultipart
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state).await?;
        Ok(Self(multipart))
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_json_field_is_json_error() {
        let (_, app) = test_app(no_uploads()).await;
        let (status, body) = send(
            &app,
            json_request("POST", "/api/auth/login", json!({ "email": "admin" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("password"));
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_malformed_json_is_json_error() {
        let (_, app) = test_app(no_uploads()).await;
        let request = Request::builder()
            .method("POST")
            .uri("/api/folders")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_json_error() {
        let (_, app) = test_app(no_uploads()).await;
        let (status, body) = send(&app, empty_request("DELETE", "/api/pillars/abc")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("abc"));
    }

    #[tokio::test]
    async fn test_bad_query_is_json_error() {
        let (_, app) = test_app(no_uploads()).await;
        let (status, body) = send(&app, empty_request("GET", "/api/images?folderId=x")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_missing_multipart_boundary_is_json_error() {
        let (_, app) = test_app(no_uploads()).await;
        let request = Request::builder()
            .method("POST")
            .uri("/api/pillars")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
    }
}
