//! Table definitions. Statements are additive only: they create what is
//! missing and never drop or alter an existing table.

use shared::database::DbTransaction;

pub const ADMIN_USERS: &str = "admin_users";
pub const GALLERY_FOLDERS: &str = "gallery_folders";
pub const GALLERY_IMAGES: &str = "gallery_images";
pub const PILLARS: &str = "pillars";
pub const PRESS_RELEASES: &str = "press_releases";
pub const CLIENTELE: &str = "clientele";
pub const ACTIVITIES: &str = "activities";
pub const CSR_CONNECTS: &str = "csr_connects";
pub const VOLUNTEERS: &str = "volunteers";

/// Every table owned by the service, in dependency order.
pub const TABLES: [&str; 9] = [
    ADMIN_USERS,
    GALLERY_FOLDERS,
    GALLERY_IMAGES,
    PILLARS,
    PRESS_RELEASES,
    CLIENTELE,
    ACTIVITIES,
    CSR_CONNECTS,
    VOLUNTEERS,
];

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS admin_users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email VARCHAR(255) NOT NULL UNIQUE,
        password_hash VARCHAR(255) NOT NULL,
        role VARCHAR(50) NOT NULL DEFAULT 'volunteer'
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS gallery_folders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(255) NOT NULL,
        description TEXT,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS gallery_images (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        folder_id INTEGER NOT NULL REFERENCES gallery_folders(id) ON DELETE CASCADE,
        image_url TEXT NOT NULL,
        description TEXT,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_gallery_images_folder_id ON gallery_images (folder_id)",
    r#"
    CREATE TABLE IF NOT EXISTS pillars (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(255) NOT NULL,
        description TEXT NOT NULL,
        image_url TEXT,
        icon VARCHAR(50) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS press_releases (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(255) NOT NULL,
        date VARCHAR(50) NOT NULL,
        content TEXT NOT NULL,
        image_url TEXT,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS clientele (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(255) NOT NULL,
        description TEXT,
        logo_url TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS activities (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(255) NOT NULL,
        date VARCHAR(50) NOT NULL,
        location VARCHAR(255) NOT NULL,
        description TEXT NOT NULL,
        image_url TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS csr_connects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        company_name VARCHAR(255) NOT NULL,
        description TEXT NOT NULL,
        logo_url TEXT,
        website_url TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS volunteers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        phone VARCHAR(50) NOT NULL,
        message TEXT NOT NULL,
        submitted_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
];

/// Create any missing table inside the caller's transaction.
pub async fn ensure_schema(tx: &mut DbTransaction<'_>) -> Result<(), sqlx::Error> {
    for statement in STATEMENTS {
        sqlx::query(statement).execute(&mut **tx).await?;
    }
    Ok(())
}
