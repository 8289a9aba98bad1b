use shared::database::DbPool;

use crate::models::{Clientele, ClienteleForm, CsrConnect, CsrConnectForm};

// ============= Clientele =============

pub async fn list_clientele(pool: &DbPool) -> Result<Vec<Clientele>, sqlx::Error> {
    sqlx::query_as::<_, Clientele>(
        "SELECT id, name, description, logo_url FROM clientele ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

pub async fn create_clientele(
    pool: &DbPool,
    form: &ClienteleForm,
    logo_url: &str,
) -> Result<Clientele, sqlx::Error> {
    let client = sqlx::query_as::<_, Clientele>(
        r#"
        INSERT INTO clientele (name, description, logo_url)
        VALUES (?1, ?2, ?3)
        RETURNING id, name, description, logo_url
        "#,
    )
    .bind(&form.name)
    .bind(&form.description)
    .bind(logo_url)
    .fetch_one(pool)
    .await?;

    tracing::info!("Created client: id={}", client.id);
    Ok(client)
}

pub async fn update_clientele(
    pool: &DbPool,
    id: i64,
    form: &ClienteleForm,
    logo_url: Option<&str>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE clientele
        SET name = ?1, description = ?2, logo_url = COALESCE(?3, logo_url)
        WHERE id = ?4
        "#,
    )
    .bind(&form.name)
    .bind(&form.description)
    .bind(logo_url)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_clientele(pool: &DbPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM clientele WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// ============= CSR connects =============

pub async fn list_csr_connects(pool: &DbPool) -> Result<Vec<CsrConnect>, sqlx::Error> {
    sqlx::query_as::<_, CsrConnect>(
        r#"
        SELECT id, company_name, description, website_url, logo_url
        FROM csr_connects
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create_csr_connect(
    pool: &DbPool,
    form: &CsrConnectForm,
    logo_url: &str,
) -> Result<CsrConnect, sqlx::Error> {
    let csr = sqlx::query_as::<_, CsrConnect>(
        r#"
        INSERT INTO csr_connects (company_name, description, website_url, logo_url)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id, company_name, description, website_url, logo_url
        "#,
    )
    .bind(&form.company_name)
    .bind(&form.description)
    .bind(&form.website_url)
    .bind(logo_url)
    .fetch_one(pool)
    .await?;

    tracing::info!("Created CSR connect: id={}", csr.id);
    Ok(csr)
}

/// `website_url` is always overwritten, so an omitted field clears it
pub async fn update_csr_connect(
    pool: &DbPool,
    id: i64,
    form: &CsrConnectForm,
    logo_url: Option<&str>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE csr_connects
        SET company_name = ?1, description = ?2, website_url = ?3,
            logo_url = COALESCE(?4, logo_url)
        WHERE id = ?5
        "#,
    )
    .bind(&form.company_name)
    .bind(&form.description)
    .bind(&form.website_url)
    .bind(logo_url)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_csr_connect(pool: &DbPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM csr_connects WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
