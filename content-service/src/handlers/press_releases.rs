use axum::{extract::State, Json};
use shared::types::MessageResponse;

use super::extract::{ApiMultipart, ApiPath};
use super::upload::{store_optional_image, UploadForm};
use crate::db::repository::content;
use crate::error::{AppError, AppResult};
use crate::models::{PressRelease, PressReleaseForm};
use crate::AppState;

fn release_form(form: &UploadForm) -> AppResult<PressReleaseForm> {
    Ok(PressReleaseForm {
        title: form.required("title")?,
        date: form.required("date")?,
        content: form.required("content")?,
    })
}

pub async fn list_press_releases(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PressRelease>>> {
    Ok(Json(content::list_press_releases(&state.db).await?))
}

pub async fn create_press_release(
    State(state): State<AppState>,
    ApiMultipart(multipart): ApiMultipart,
) -> AppResult<Json<PressRelease>> {
    let mut form = UploadForm::parse(multipart, "image").await?;
    let fields = release_form(&form)?;
    let image_url = store_optional_image(&state, &mut form).await?.unwrap_or_default();

    Ok(Json(
        content::create_press_release(&state.db, &fields, &image_url).await?,
    ))
}

pub async fn update_press_release(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiMultipart(multipart): ApiMultipart,
) -> AppResult<Json<MessageResponse>> {
    let mut form = UploadForm::parse(multipart, "image").await?;
    let fields = release_form(&form)?;
    let image_url = store_optional_image(&state, &mut form).await?;

    if !content::update_press_release(&state.db, id, &fields, image_url.as_deref()).await? {
        return Err(AppError::not_found("Press release"));
    }
    Ok(Json(MessageResponse::updated()))
}

pub async fn delete_press_release(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<MessageResponse>> {
    if !content::delete_press_release(&state.db, id).await? {
        return Err(AppError::not_found("Press release"));
    }
    Ok(Json(MessageResponse::deleted()))
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_press_release_crud() {
        let url = "https://res.cloudinary.com/demo/press.jpg";
        let (_, app) = test_app(uploads_to(url, 1)).await;

        let (status, created) = send(
            &app,
            multipart_request(
                "POST",
                "/api/press-releases",
                &[("title", "Annual report"), ("date", "2025-04-01"), ("content", "...")],
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["image_url"], "");
        let uri = format!("/api/press-releases/{}", created["id"]);

        let (status, _) = send(
            &app,
            multipart_request(
                "PUT",
                &uri,
                &[("title", "Annual report 2025"), ("date", "2025-04-01"), ("content", "...")],
                Some(FilePart::new("image", b"cover")),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, listed) = send(&app, empty_request("GET", "/api/press-releases")).await;
        assert_eq!(listed[0]["title"], "Annual report 2025");
        assert_eq!(listed[0]["image_url"], url);

        let (status, _) = send(&app, empty_request("DELETE", &uri)).await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = send(&app, empty_request("DELETE", &uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Press release not found");
    }
}
