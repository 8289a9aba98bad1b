// Media module: upload normalization and the hosted media service

pub mod cloudinary;
pub mod normalizer;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub use cloudinary::CloudinaryClient;
pub use normalizer::normalize_blocking;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("media host request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("media host rejected upload ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("media host response did not include a URL")]
    MissingUrl,
}

/// Hosted image store. Receives finished bytes, answers with a public URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaHost: Send + Sync {
    async fn upload(&self, data: Bytes, folder: &str) -> Result<String, MediaError>;
}
