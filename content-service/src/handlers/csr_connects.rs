use axum::{extract::State, Json};
use shared::types::MessageResponse;

use super::extract::{ApiMultipart, ApiPath};
use super::upload::{store_optional_image, UploadForm};
use crate::db::repository::partner;
use crate::error::{AppError, AppResult};
use crate::models::{CsrConnect, CsrConnectForm};
use crate::AppState;

fn csr_form(form: &UploadForm) -> AppResult<CsrConnectForm> {
    Ok(CsrConnectForm {
        company_name: form.required("company_name")?,
        description: form.required("description")?,
        website_url: form.optional("website_url"),
    })
}

pub async fn list_csr_connects(State(state): State<AppState>) -> AppResult<Json<Vec<CsrConnect>>> {
    Ok(Json(partner::list_csr_connects(&state.db).await?))
}

pub async fn create_csr_connect(
    State(state): State<AppState>,
    ApiMultipart(multipart): ApiMultipart,
) -> AppResult<Json<CsrConnect>> {
    let mut form = UploadForm::parse(multipart, "logo").await?;
    let fields = csr_form(&form)?;
    let logo_url = store_optional_image(&state, &mut form).await?.unwrap_or_default();

    Ok(Json(partner::create_csr_connect(&state.db, &fields, &logo_url).await?))
}

pub async fn update_csr_connect(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiMultipart(multipart): ApiMultipart,
) -> AppResult<Json<MessageResponse>> {
    let mut form = UploadForm::parse(multipart, "logo").await?;
    let fields = csr_form(&form)?;
    let logo_url = store_optional_image(&state, &mut form).await?;

    if !partner::update_csr_connect(&state.db, id, &fields, logo_url.as_deref()).await? {
        return Err(AppError::not_found("CSR connect"));
    }
    Ok(Json(MessageResponse::updated()))
}

pub async fn delete_csr_connect(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<MessageResponse>> {
    if !partner::delete_csr_connect(&state.db, id).await? {
        return Err(AppError::not_found("CSR connect"));
    }
    Ok(Json(MessageResponse::deleted()))
}
