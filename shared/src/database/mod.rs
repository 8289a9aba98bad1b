pub mod connection;
pub mod sqlite;

pub use connection::{
    close_connections,
    create_connection_pool,
    health_check,
    test_connection,
    DbPool,
    DbTransaction,
};

// Re-export common database types for convenience
pub use sqlx::{
    sqlite::{SqlitePool, SqliteRow},
    Error as SqlxError,
    Row,
};

// Database configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://server/database.sqlite?mode=rwc".to_string(),
            max_connections: 5,
            connection_timeout: 30,
        }
    }
}

impl DatabaseConfig {
    /// Configuration for a private in-memory database, used by tests.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..Default::default()
        }
    }

    /// Every connection to `:memory:` opens its own empty database, so such
    /// pools must be pinned to a single long-lived connection.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

// Error types for database operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Transaction error: {0}")]
    Transaction(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
