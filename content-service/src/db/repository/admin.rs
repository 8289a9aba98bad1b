use shared::database::DbPool;

use crate::models::AdminUser;

/// Get an admin user by login identifier
pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<AdminUser>, sqlx::Error> {
    sqlx::query_as::<_, AdminUser>(
        r#"
        SELECT id, email, password_hash, role
        FROM admin_users
        WHERE email = ?1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}
