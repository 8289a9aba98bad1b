use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GalleryFolder {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    /// URL of the oldest image in the folder, if any.
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFolderRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GalleryImage {
    pub id: i64,
    pub folder_id: i64,
    pub image_url: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct CreateImageRequest {
    pub folder_id: i64,
    pub image_url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageFilter {
    #[serde(rename = "folderId")]
    pub folder_id: Option<i64>,
}
