//! Startup seeding: schema plus the baseline rows the site needs to render.

use shared::database::{sqlite::count_rows, DatabaseError, DbPool};
use thiserror::Error;
use tracing::info;

use crate::auth::{self, AuthError};
use crate::config::BootstrapConfig;
use crate::db::schema::{self, PILLARS};
use crate::models::admin::ROLE_ADMIN;

/// Identifier of the administrator created on first start.
pub const BOOTSTRAP_ADMIN_EMAIL: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillarSeed {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub icon: &'static str,
}

pub const DEFAULT_PILLARS: [PillarSeed; 4] = [
    PillarSeed {
        title: "Education",
        description: "Unlocking potential through foundational learning and life skills.",
        image_url: "/pillar_education.jpg",
        icon: "BookOpen",
    },
    PillarSeed {
        title: "Support",
        description: "Providing encouragement, capacity-building, and presence for self-reliance.",
        image_url: "/pillar_nutrition.jpg",
        icon: "HandHeart",
    },
    PillarSeed {
        title: "Hope",
        description: "Planting seeds of transformation through acts of kindness.",
        image_url: "/pillar_livelihood.jpg",
        icon: "Sun",
    },
    PillarSeed {
        title: "Love",
        description: "Driven by compassion, respect, and empathy.",
        image_url: "/pillar_love.jpg",
        icon: "Heart",
    },
];

/// What a seeding run actually changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub pillars_inserted: usize,
    pub admin_created: bool,
}

impl SeedReport {
    pub fn is_noop(&self) -> bool {
        self.pillars_inserted == 0 && !self.admin_created
    }
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("database error during seeding: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("database error during seeding: {0}")]
    Database(#[from] DatabaseError),

    #[error("could not hash bootstrap credential: {0}")]
    Credential(#[from] AuthError),
}

/// Ensure the schema exists and insert the baseline rows that are missing.
///
/// Runs in one transaction: either everything is committed or nothing is.
/// Existing rows are never touched, so a second run only repeats the
/// schema check.
pub async fn run(pool: &DbPool, bootstrap: &BootstrapConfig) -> Result<SeedReport, SeedError> {
    let mut tx = pool.begin().await?;
    let mut report = SeedReport::default();

    schema::ensure_schema(&mut tx).await?;

    if count_rows(&mut *tx, PILLARS).await? == 0 {
        for pillar in DEFAULT_PILLARS.iter() {
            sqlx::query(
                r#"
                INSERT INTO pillars (title, description, image_url, icon)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(pillar.title)
            .bind(pillar.description)
            .bind(pillar.image_url)
            .bind(pillar.icon)
            .execute(&mut *tx)
            .await?;
        }
        report.pillars_inserted = DEFAULT_PILLARS.len();
        info!("Seeded {} default pillars", report.pillars_inserted);
    }

    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM admin_users WHERE email = ?1")
        .bind(BOOTSTRAP_ADMIN_EMAIL)
        .fetch_optional(&mut *tx)
        .await?;

    if existing.is_none() {
        let password_hash = auth::hash_password(&bootstrap.admin_password)?;
        sqlx::query("INSERT INTO admin_users (email, password_hash, role) VALUES (?1, ?2, ?3)")
            .bind(BOOTSTRAP_ADMIN_EMAIL)
            .bind(&password_hash)
            .bind(ROLE_ADMIN)
            .execute(&mut *tx)
            .await?;
        report.admin_created = true;
        info!(email = BOOTSTRAP_ADMIN_EMAIL, "Created bootstrap admin user; change its password after deployment");
    }

    tx.commit().await?;
    Ok(report)
}
