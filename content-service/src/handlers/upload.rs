use std::collections::HashMap;

use axum::extract::Multipart;
use bytes::Bytes;

use crate::error::{AppError, AppResult};
use crate::media::normalize_blocking;
use crate::AppState;

/// A parsed multipart form: text fields plus at most one file part.
#[derive(Debug, Default)]
pub struct UploadForm {
    fields: HashMap<String, String>,
    file: Option<Bytes>,
}

impl UploadForm {
    /// Read every part of `multipart`. The part named `file_field` is kept as
    /// raw bytes; an empty file part counts as no file at all.
    pub async fn parse(mut multipart: Multipart, file_field: &str) -> AppResult<Self> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            tracing::debug!("Processing field: {}", name);

            if name == file_field {
                let data = field.bytes().await?;
                if data.is_empty() {
                    tracing::debug!("Ignoring empty file part {}", name);
                } else {
                    tracing::info!(
                        "File received: field={}, size={} bytes",
                        name,
                        data.len()
                    );
                    form.file = Some(data);
                }
            } else if field.file_name().is_some() {
                let skipped = field.bytes().await?;
                tracing::warn!("Skipping unexpected file part {} ({} bytes)", name, skipped.len());
            } else {
                let value = field.text().await?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    pub fn required(&self, name: &str) -> AppResult<String> {
        self.fields
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::bad_request(format!("{} is required", name)))
    }

    pub fn optional(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    pub fn take_file(&mut self) -> Option<Bytes> {
        self.file.take()
    }
}

/// Normalize an uploaded image and push it to the media host.
pub async fn store_image(state: &AppState, data: Bytes) -> AppResult<String> {
    let normalized = normalize_blocking(data).await;
    let url = state
        .media
        .upload(normalized.into_bytes(), &state.config.media.folder)
        .await?;
    Ok(url)
}

/// Upload the form's file part, if it has one.
pub async fn store_optional_image(
    state: &AppState,
    form: &mut UploadForm,
) -> AppResult<Option<String>> {
    match form.take_file() {
        Some(data) => Ok(Some(store_image(state, data).await?)),
        None => Ok(None),
    }
}
