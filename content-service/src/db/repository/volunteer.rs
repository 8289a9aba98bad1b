use shared::database::DbPool;

use crate::models::{CreateVolunteerRequest, Volunteer};

/// Most recent submissions first
pub async fn list_volunteers(pool: &DbPool) -> Result<Vec<Volunteer>, sqlx::Error> {
    sqlx::query_as::<_, Volunteer>(
        r#"
        SELECT id, name, email, phone, message, submitted_at
        FROM volunteers
        ORDER BY submitted_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create_volunteer(
    pool: &DbPool,
    request: &CreateVolunteerRequest,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO volunteers (name, email, phone, message)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&request.name)
    .bind(&request.email)
    .bind(&request.phone)
    .bind(&request.message)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    tracing::info!("Recorded volunteer application: id={}", id);
    Ok(id)
}

pub async fn delete_volunteer(pool: &DbPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM volunteers WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::seeded_pool;

    fn application(name: &str) -> CreateVolunteerRequest {
        CreateVolunteerRequest {
            name: name.to_string(),
            email: format!("{}@example.org", name.to_lowercase()),
            phone: "9999999999".to_string(),
            message: "Happy to help".to_string(),
        }
    }

    #[tokio::test]
    async fn test_volunteer_submissions() {
        let pool = seeded_pool().await;

        let first = create_volunteer(&pool, &application("Ravi")).await.unwrap();
        let second = create_volunteer(&pool, &application("Meera")).await.unwrap();

        let listed = list_volunteers(&pool).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second);
        assert_eq!(listed[1].email, "ravi@example.org");

        assert!(delete_volunteer(&pool, first).await.unwrap());
        assert!(!delete_volunteer(&pool, first).await.unwrap());
        assert_eq!(list_volunteers(&pool).await.unwrap().len(), 1);
    }
}
