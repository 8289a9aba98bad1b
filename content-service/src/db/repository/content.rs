use shared::database::DbPool;

use crate::models::{Activity, ActivityForm, Pillar, PillarForm, PressRelease, PressReleaseForm};

// ============= Pillars =============

pub async fn list_pillars(pool: &DbPool) -> Result<Vec<Pillar>, sqlx::Error> {
    sqlx::query_as::<_, Pillar>(
        "SELECT id, title, description, icon, image_url FROM pillars ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

pub async fn create_pillar(
    pool: &DbPool,
    form: &PillarForm,
    image_url: &str,
) -> Result<Pillar, sqlx::Error> {
    let pillar = sqlx::query_as::<_, Pillar>(
        r#"
        INSERT INTO pillars (title, description, icon, image_url)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id, title, description, icon, image_url
        "#,
    )
    .bind(&form.title)
    .bind(&form.description)
    .bind(&form.icon)
    .bind(image_url)
    .fetch_one(pool)
    .await?;

    tracing::info!("Created pillar: id={}", pillar.id);
    Ok(pillar)
}

/// Overwrite the text fields; the image URL changes only when one is given
pub async fn update_pillar(
    pool: &DbPool,
    id: i64,
    form: &PillarForm,
    image_url: Option<&str>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE pillars
        SET title = ?1, description = ?2, icon = ?3, image_url = COALESCE(?4, image_url)
        WHERE id = ?5
        "#,
    )
    .bind(&form.title)
    .bind(&form.description)
    .bind(&form.icon)
    .bind(image_url)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_pillar(pool: &DbPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM pillars WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// ============= Press releases =============

/// Ordered by the editorial `date` text, newest first
pub async fn list_press_releases(pool: &DbPool) -> Result<Vec<PressRelease>, sqlx::Error> {
    sqlx::query_as::<_, PressRelease>(
        r#"
        SELECT id, title, date, content, image_url, created_at
        FROM press_releases
        ORDER BY date DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create_press_release(
    pool: &DbPool,
    form: &PressReleaseForm,
    image_url: &str,
) -> Result<PressRelease, sqlx::Error> {
    let release = sqlx::query_as::<_, PressRelease>(
        r#"
        INSERT INTO press_releases (title, date, content, image_url)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id, title, date, content, image_url, created_at
        "#,
    )
    .bind(&form.title)
    .bind(&form.date)
    .bind(&form.content)
    .bind(image_url)
    .fetch_one(pool)
    .await?;

    tracing::info!("Created press release: id={}", release.id);
    Ok(release)
}

pub async fn update_press_release(
    pool: &DbPool,
    id: i64,
    form: &PressReleaseForm,
    image_url: Option<&str>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE press_releases
        SET title = ?1, date = ?2, content = ?3, image_url = COALESCE(?4, image_url)
        WHERE id = ?5
        "#,
    )
    .bind(&form.title)
    .bind(&form.date)
    .bind(&form.content)
    .bind(image_url)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_press_release(pool: &DbPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM press_releases WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// ============= Activities =============

pub async fn list_activities(pool: &DbPool) -> Result<Vec<Activity>, sqlx::Error> {
    sqlx::query_as::<_, Activity>(
        r#"
        SELECT id, title, date, location, description, image_url
        FROM activities
        ORDER BY date DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create_activity(
    pool: &DbPool,
    form: &ActivityForm,
    image_url: &str,
) -> Result<Activity, sqlx::Error> {
    let activity = sqlx::query_as::<_, Activity>(
        r#"
        INSERT INTO activities (title, date, location, description, image_url)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id, title, date, location, description, image_url
        "#,
    )
    .bind(&form.title)
    .bind(&form.date)
    .bind(&form.location)
    .bind(&form.description)
    .bind(image_url)
    .fetch_one(pool)
    .await?;

    tracing::info!("Created activity: id={}", activity.id);
    Ok(activity)
}

pub async fn update_activity(
    pool: &DbPool,
    id: i64,
    form: &ActivityForm,
    image_url: Option<&str>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE activities
        SET title = ?1, date = ?2, location = ?3, description = ?4,
            image_url = COALESCE(?5, image_url)
        WHERE id = ?6
        "#,
    )
    .bind(&form.title)
    .bind(&form.date)
    .bind(&form.location)
    .bind(&form.description)
    .bind(image_url)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_activity(pool: &DbPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM activities WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::seeded_pool;

    #[tokio::test]
    async fn test_pillar_update_keeps_image_unless_replaced() {
        let pool = seeded_pool().await;
        let form = PillarForm {
            title: "Health".to_string(),
            description: "Clinics and camps".to_string(),
            icon: "Stethoscope".to_string(),
        };

        let pillar = create_pillar(&pool, &form, "https://cdn/health.jpg").await.unwrap();
        assert_eq!(list_pillars(&pool).await.unwrap().len(), 5);

        let renamed = PillarForm {
            title: "Wellbeing".to_string(),
            ..form.clone()
        };
        assert!(update_pillar(&pool, pillar.id, &renamed, None).await.unwrap());

        let stored = list_pillars(&pool)
            .await
            .unwrap()
            .into_iter()
            .find(|p| p.id == pillar.id)
            .unwrap();
        assert_eq!(stored.title, "Wellbeing");
        assert_eq!(stored.image_url.as_deref(), Some("https://cdn/health.jpg"));

        assert!(update_pillar(&pool, pillar.id, &renamed, Some("https://cdn/new.jpg"))
            .await
            .unwrap());
        let stored = list_pillars(&pool).await.unwrap().pop().unwrap();
        assert_eq!(stored.image_url.as_deref(), Some("https://cdn/new.jpg"));

        assert!(!update_pillar(&pool, 9999, &renamed, None).await.unwrap());
        assert!(delete_pillar(&pool, pillar.id).await.unwrap());
        assert!(!delete_pillar(&pool, pillar.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_press_releases_sorted_by_date() {
        let pool = seeded_pool().await;
        for date in ["2024-01-10", "2025-03-01", "2024-11-20"] {
            let form = PressReleaseForm {
                title: format!("Release {date}"),
                date: date.to_string(),
                content: "...".to_string(),
            };
            create_press_release(&pool, &form, "").await.unwrap();
        }

        let dates: Vec<String> = list_press_releases(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(dates, vec!["2025-03-01", "2024-11-20", "2024-01-10"]);
    }

    #[tokio::test]
    async fn test_activity_crud() {
        let pool = seeded_pool().await;
        let form = ActivityForm {
            title: "Tree planting".to_string(),
            date: "2025-07-05".to_string(),
            location: "Noida".to_string(),
            description: "200 saplings".to_string(),
        };

        let activity = create_activity(&pool, &form, "").await.unwrap();
        assert_eq!(activity.image_url.as_deref(), Some(""));

        let moved = ActivityForm {
            location: "Greater Noida".to_string(),
            ..form
        };
        assert!(update_activity(&pool, activity.id, &moved, Some("https://cdn/trees.jpg"))
            .await
            .unwrap());

        let listed = list_activities(&pool).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].location, "Greater Noida");
        assert_eq!(listed[0].image_url.as_deref(), Some("https://cdn/trees.jpg"));

        assert!(delete_activity(&pool, activity.id).await.unwrap());
        assert!(list_activities(&pool).await.unwrap().is_empty());
    }
}
