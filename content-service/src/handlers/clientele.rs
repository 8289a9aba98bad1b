use axum::{extract::State, Json};
use shared::types::MessageResponse;

use super::extract::{ApiMultipart, ApiPath};
use super::upload::{store_optional_image, UploadForm};
use crate::db::repository::partner;
use crate::error::{AppError, AppResult};
use crate::models::{Clientele, ClienteleForm};
use crate::AppState;

fn clientele_form(form: &UploadForm) -> AppResult<ClienteleForm> {
    Ok(ClienteleForm {
        name: form.required("name")?,
        description: form.optional("description"),
    })
}

pub async fn list_clientele(State(state): State<AppState>) -> AppResult<Json<Vec<Clientele>>> {
    Ok(Json(partner::list_clientele(&state.db).await?))
}

pub async fn create_clientele(
    State(state): State<AppState>,
    ApiMultipart(multipart): ApiMultipart,
) -> AppResult<Json<Clientele>> {
    let mut form = UploadForm::parse(multipart, "logo").await?;
    let fields = clientele_form(&form)?;
    let logo_url = store_optional_image(&state, &mut form).await?.unwrap_or_default();

    Ok(Json(partner::create_clientele(&state.db, &fields, &logo_url).await?))
}

pub async fn update_clientele(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiMultipart(multipart): ApiMultipart,
) -> AppResult<Json<MessageResponse>> {
    let mut form = UploadForm::parse(multipart, "logo").await?;
    let fields = clientele_form(&form)?;
    let logo_url = store_optional_image(&state, &mut form).await?;

    if !partner::update_clientele(&state.db, id, &fields, logo_url.as_deref()).await? {
        return Err(AppError::not_found("Client"));
    }
    Ok(Json(MessageResponse::updated()))
}

pub async fn delete_clientele(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<MessageResponse>> {
    if !partner::delete_clientele(&state.db, id).await? {
        return Err(AppError::not_found("Client"));
    }
    Ok(Json(MessageResponse::deleted()))
}
