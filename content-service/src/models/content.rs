use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pillar {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub image_url: Option<String>,
}

/// Text fields of the pillar form; the image URL is resolved separately.
#[derive(Debug, Clone)]
pub struct PillarForm {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PressRelease {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct PressReleaseForm {
    pub title: String,
    pub date: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Activity {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ActivityForm {
    pub title: String,
    pub date: String,
    pub location: String,
    pub description: String,
}
