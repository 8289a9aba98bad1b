use axum::{extract::State, Json};
use shared::types::MessageResponse;

use super::extract::{ApiMultipart, ApiPath};
use super::upload::{store_optional_image, UploadForm};
use crate::db::repository::content;
use crate::error::{AppError, AppResult};
use crate::models::{Pillar, PillarForm};
use crate::AppState;

fn pillar_form(form: &UploadForm) -> AppResult<PillarForm> {
    Ok(PillarForm {
        title: form.required("title")?,
        description: form.required("description")?,
        icon: form.required("icon")?,
    })
}

pub async fn list_pillars(State(state): State<AppState>) -> AppResult<Json<Vec<Pillar>>> {
    Ok(Json(content::list_pillars(&state.db).await?))
}

/// An uploaded `image` wins over an `image_url` text field
pub async fn create_pillar(
    State(state): State<AppState>,
    ApiMultipart(multipart): ApiMultipart,
) -> AppResult<Json<Pillar>> {
    let mut form = UploadForm::parse(multipart, "image").await?;
    let fields = pillar_form(&form)?;

    let image_url = match store_optional_image(&state, &mut form).await? {
        Some(url) => url,
        None => form.optional("image_url").unwrap_or_default(),
    };

    Ok(Json(content::create_pillar(&state.db, &fields, &image_url).await?))
}

pub async fn update_pillar(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiMultipart(multipart): ApiMultipart,
) -> AppResult<Json<MessageResponse>> {
    let mut form = UploadForm::parse(multipart, "image").await?;
    let fields = pillar_form(&form)?;
    let image_url = store_optional_image(&state, &mut form).await?;

    if !content::update_pillar(&state.db, id, &fields, image_url.as_deref()).await? {
        return Err(AppError::not_found("Pillar"));
    }
    Ok(Json(MessageResponse::updated()))
}

pub async fn delete_pillar(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<MessageResponse>> {
    if !content::delete_pillar(&state.db, id).await? {
        return Err(AppError::not_found("Pillar"));
    }
    Ok(Json(MessageResponse::deleted()))
}
