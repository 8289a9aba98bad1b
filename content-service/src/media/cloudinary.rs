// Cloudinary signed-upload client

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha1::{Digest, Sha1};

use super::{MediaError, MediaHost};
use crate::config::MediaConfig;

const UPLOAD_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Clone)]
pub struct CloudinaryClient {
    http: reqwest::Client,
    upload_url: String,
    api_key: String,
    api_secret: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    error: Option<UploadErrorBody>,
}

#[derive(Debug, Deserialize)]
struct UploadErrorBody {
    message: String,
}

impl CloudinaryClient {
    pub fn new(config: &MediaConfig) -> Result<Self, MediaError> {
        let http = reqwest::Client::builder().timeout(UPLOAD_TIMEOUT).build()?;

        Ok(Self {
            http,
            upload_url: format!(
                "https://api.cloudinary.com/v1_1/{}/image/upload",
                config.cloud_name
            ),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
        })
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }
}

/// Request signature: parameters sorted by name, joined as `k=v&k=v`, the
/// secret appended, then SHA-1 hex.
pub fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let joined = sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Error text from a failed upload. The host answers with a JSON `error`
/// object, but proxies in front of it may send plain text or HTML.
fn rejection_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(UploadResponse {
        error: Some(error), ..
    }) = serde_json::from_str::<UploadResponse>(body)
    {
        return error.message;
    }

    let body = body.trim();
    if body.is_empty() {
        status.to_string()
    } else {
        body.to_string()
    }
}

#[async_trait]
impl MediaHost for CloudinaryClient {
    async fn upload(&self, data: Bytes, folder: &str) -> Result<String, MediaError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = sign(&[("folder", folder), ("timestamp", timestamp.as_str())], &self.api_secret);
        let size = data.len();

        let form = Form::new()
            .part("file", Part::stream(data).file_name("upload"))
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", folder.to_string())
            .text("signature", signature);

        tracing::debug!("Uploading {} bytes to media host folder {}", size, folder);

        let response = self.http.post(&self.upload_url).multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = rejection_message(status, &text);
            tracing::error!("Media host rejected upload: status={}, {}", status, message);
            return Err(MediaError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: UploadResponse = response.json().await?;
        let url = body.secure_url.ok_or(MediaError::MissingUrl)?;
        tracing::info!("Uploaded image to media host: {}", url);
        Ok(url)
    }
}
