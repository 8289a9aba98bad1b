use axum::{extract::State, Json};
use shared::types::MessageResponse;
use validator::Validate;

use super::extract::{ApiJson, ApiMultipart, ApiPath, ApiQuery};
use super::upload::{store_image, UploadForm};
use crate::db::repository::gallery;
use crate::error::{AppError, AppResult};
use crate::models::{CreateFolderRequest, CreateImageRequest, GalleryFolder, GalleryImage, ImageFilter};
use crate::AppState;

// ============= Folders =============

pub async fn list_folders(State(state): State<AppState>) -> AppResult<Json<Vec<GalleryFolder>>> {
    Ok(Json(gallery::list_folders(&state.db).await?))
}

pub async fn create_folder(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateFolderRequest>,
) -> AppResult<Json<GalleryFolder>> {
    req.validate()?;
    Ok(Json(gallery::create_folder(&state.db, &req).await?))
}

pub async fn delete_folder(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<MessageResponse>> {
    if !gallery::delete_folder(&state.db, id).await? {
        return Err(AppError::not_found("Folder"));
    }
    Ok(Json(MessageResponse::deleted()))
}

// ============= Images =============

pub async fn list_images(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<ImageFilter>,
) -> AppResult<Json<Vec<GalleryImage>>> {
    Ok(Json(gallery::list_images(&state.db, filter.folder_id).await?))
}

/// Multipart `folderId`, `description?` and a required `image` part
pub async fn upload_image(
    State(state): State<AppState>,
    ApiMultipart(multipart): ApiMultipart,
) -> AppResult<Json<GalleryImage>> {
    let mut form = UploadForm::parse(multipart, "image").await?;

    let raw_folder_id = form.required("folderId")?;
    let folder_id: i64 = raw_folder_id
        .trim()
        .parse()
        .map_err(|_| AppError::bad_request(format!("invalid folderId '{}'", raw_folder_id)))?;
    let data = form
        .take_file()
        .ok_or_else(|| AppError::bad_request("No file"))?;

    if !gallery::folder_exists(&state.db, folder_id).await? {
        return Err(AppError::not_found("Folder"));
    }

    let image_url = store_image(&state, data).await?;
    let request = CreateImageRequest {
        folder_id,
        image_url,
        description: form.optional("description"),
    };

    let image = gallery::create_image(&state.db, &request)
        .await
        .map_err(folder_gone)?;
    Ok(Json(image))
}

/// The folder can be deleted while its image is being uploaded
fn folder_gone(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            AppError::not_found("Folder")
        }
        _ => AppError::from(err),
    }
}

pub async fn delete_image(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<MessageResponse>> {
    if !gallery::delete_image(&state.db, id).await? {
        return Err(AppError::not_found("Image"));
    }
    Ok(Json(MessageResponse::deleted()))
}
