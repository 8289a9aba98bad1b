use shared::database::DbPool;

use crate::models::{CreateFolderRequest, CreateImageRequest, GalleryFolder, GalleryImage};

/// List folders newest first, each with the URL of its oldest image as cover
pub async fn list_folders(pool: &DbPool) -> Result<Vec<GalleryFolder>, sqlx::Error> {
    sqlx::query_as::<_, GalleryFolder>(
        r#"
        SELECT
            f.id,
            f.name,
            f.description,
            f.created_at,
            (
                SELECT i.image_url FROM gallery_images i
                WHERE i.folder_id = f.id
                ORDER BY i.created_at ASC, i.id ASC
                LIMIT 1
            ) AS cover_image
        FROM gallery_folders f
        ORDER BY f.created_at DESC, f.id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn folder_exists(pool: &DbPool, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM gallery_folders WHERE id = ?1)")
        .bind(id)
        .fetch_one(pool)
        .await
}

pub async fn create_folder(
    pool: &DbPool,
    request: &CreateFolderRequest,
) -> Result<GalleryFolder, sqlx::Error> {
    let folder = sqlx::query_as::<_, GalleryFolder>(
        r#"
        INSERT INTO gallery_folders (name, description)
        VALUES (?1, ?2)
        RETURNING id, name, description, created_at, NULL AS cover_image
        "#,
    )
    .bind(&request.name)
    .bind(&request.description)
    .fetch_one(pool)
    .await?;

    tracing::info!("Created gallery folder: id={}", folder.id);
    Ok(folder)
}

/// Delete a folder; its images go with it through the foreign key cascade
pub async fn delete_folder(pool: &DbPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM gallery_folders WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// List images newest first, optionally restricted to one folder
pub async fn list_images(
    pool: &DbPool,
    folder_id: Option<i64>,
) -> Result<Vec<GalleryImage>, sqlx::Error> {
    sqlx::query_as::<_, GalleryImage>(
        r#"
        SELECT id, folder_id, image_url, description, created_at
        FROM gallery_images
        WHERE ?1 IS NULL OR folder_id = ?1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(folder_id)
    .fetch_all(pool)
    .await
}

pub async fn create_image(
    pool: &DbPool,
    request: &CreateImageRequest,
) -> Result<GalleryImage, sqlx::Error> {
    let image = sqlx::query_as::<_, GalleryImage>(
        r#"
        INSERT INTO gallery_images (folder_id, image_url, description)
        VALUES (?1, ?2, ?3)
        RETURNING id, folder_id, image_url, description, created_at
        "#,
    )
    .bind(request.folder_id)
    .bind(&request.image_url)
    .bind(&request.description)
    .fetch_one(pool)
    .await?;

    tracing::info!("Created gallery image: id={} folder={}", image.id, image.folder_id);
    Ok(image)
}

pub async fn delete_image(pool: &DbPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM gallery_images WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
