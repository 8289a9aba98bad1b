use axum::{extract::State, Json};
use shared::types::MessageResponse;

use super::extract::{ApiMultipart, ApiPath};
use super::upload::{store_optional_image, UploadForm};
use crate::db::repository::content;
use crate::error::{AppError, AppResult};
use crate::models::{Activity, ActivityForm};
use crate::AppState;

fn activity_form(form: &UploadForm) -> AppResult<ActivityForm> {
    Ok(ActivityForm {
        title: form.required("title")?,
        date: form.required("date")?,
        location: form.required("location")?,
        description: form.required("description")?,
    })
}

pub async fn list_activities(State(state): State<AppState>) -> AppResult<Json<Vec<Activity>>> {
    Ok(Json(content::list_activities(&state.db).await?))
}

pub async fn create_activity(
    State(state): State<AppState>,
    ApiMultipart(multipart): ApiMultipart,
) -> AppResult<Json<Activity>> {
    let mut form = UploadForm::parse(multipart, "image").await?;
    let fields = activity_form(&form)?;
    let image_url = store_optional_image(&state, &mut form).await?.unwrap_or_default();

    Ok(Json(content::create_activity(&state.db, &fields, &image_url).await?))
}

pub async fn update_activity(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiMultipart(multipart): ApiMultipart,
) -> AppResult<Json<MessageResponse>> {
    let mut form = UploadForm::parse(multipart, "image").await?;
    let fields = activity_form(&form)?;
    let image_url = store_optional_image(&state, &mut form).await?;

    if !content::update_activity(&state.db, id, &fields, image_url.as_deref()).await? {
        return Err(AppError::not_found("Activity"));
    }
    Ok(Json(MessageResponse::updated()))
}

pub async fn delete_activity(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<MessageResponse>> {
    if !content::delete_activity(&state.db, id).await? {
        return Err(AppError::not_found("Activity"));
    }
    Ok(Json(MessageResponse::deleted()))
}
