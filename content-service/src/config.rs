use std::path::PathBuf;
use std::str::FromStr;

use shared::database::DatabaseConfig;
use shared::observability::LogFormat;
use thiserror::Error;

/// Process configuration, read once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub media: MediaConfig,
    pub storage: StorageConfig,
    pub cors: CorsConfig,
    pub bootstrap: BootstrapConfig,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

/// Credentials for the hosted media service (Cloudinary).
#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub folder: String,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
    pub thumb_dir: PathBuf,
    pub client_build_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsConfig {
    AnyOrigin,
    Origins(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    pub admin_password: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value '{value}' for {var}")]
    Invalid { var: &'static str, value: String },
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        Ok(Config {
            server: ServerConfig {
                host: get("SERVER_HOST", "0.0.0.0"),
                port: parse("PORT", get("PORT", "3000"))?,
                max_upload_bytes: parse("MAX_UPLOAD_BYTES", get("MAX_UPLOAD_BYTES", "52428800"))?,
            },
            database: DatabaseConfig {
                url: get("DATABASE_URL", "sqlite://server/database.sqlite?mode=rwc"),
                max_connections: parse(
                    "DATABASE_MAX_CONNECTIONS",
                    get("DATABASE_MAX_CONNECTIONS", "5"),
                )?,
                ..Default::default()
            },
            media: MediaConfig {
                cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
                api_key: required("CLOUDINARY_API_KEY")?,
                api_secret: required("CLOUDINARY_API_SECRET")?,
                folder: get("MEDIA_FOLDER", "aakrittii_uploads"),
            },
            storage: StorageConfig {
                upload_dir: PathBuf::from(get("UPLOAD_DIR", "server/uploads")),
                thumb_dir: PathBuf::from(get("THUMB_DIR", "server/thumbnails")),
                client_build_path: PathBuf::from(get("CLIENT_BUILD_PATH", "dist")),
            },
            cors: CorsConfig::parse(&get("ALLOWED_ORIGINS", "*")),
            bootstrap: BootstrapConfig {
                admin_password: get("ADMIN_BOOTSTRAP_PASSWORD", "Aakritii@2025"),
            },
            log_format: get("LOG_FORMAT", "pretty")
                .parse()
                .map_err(|_| ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    value: get("LOG_FORMAT", "pretty"),
                })?,
        })
    }
}

impl CorsConfig {
    /// `*` allows any origin; anything else is a comma-separated allow list.
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == "*" {
            return CorsConfig::AnyOrigin;
        }

        CorsConfig::Origins(
            raw.split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        )
    }
}

fn parse<T: FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const MEDIA: [(&str, &str); 3] = [
        ("CLOUDINARY_CLOUD_NAME", "demo"),
        ("CLOUDINARY_API_KEY", "1234"),
        ("CLOUDINARY_API_SECRET", "shh"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&MEDIA)).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.max_upload_bytes, 50 * 1024 * 1024);
        assert_eq!(config.database.url, "sqlite://server/database.sqlite?mode=rwc");
        assert_eq!(config.media.folder, "aakrittii_uploads");
        assert_eq!(config.storage.upload_dir, PathBuf::from("server/uploads"));
        assert_eq!(config.storage.thumb_dir, PathBuf::from("server/thumbnails"));
        assert_eq!(config.storage.client_build_path, PathBuf::from("dist"));
        assert_eq!(config.cors, CorsConfig::AnyOrigin);
        assert_eq!(config.bootstrap.admin_password, "Aakritii@2025");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let mut pairs = MEDIA.to_vec();
        pairs.extend([
            ("PORT", "8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("ALLOWED_ORIGINS", "https://a.org, https://www.a.org,"),
            ("LOG_FORMAT", "json"),
        ]);
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();

        assert_eq!(config.server.port, 8080);
        assert!(config.database.is_in_memory());
        assert_eq!(
            config.cors,
            CorsConfig::Origins(vec!["https://a.org".to_string(), "https://www.a.org".to_string()])
        );
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_missing_media_credentials() {
        let err = Config::from_lookup(lookup_from(&MEDIA[..2])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("CLOUDINARY_API_SECRET")));
    }

    #[test]
    fn test_blank_credential_counts_as_missing() {
        let mut pairs = MEDIA.to_vec();
        pairs[0] = ("CLOUDINARY_CLOUD_NAME", "  ");
        let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("CLOUDINARY_CLOUD_NAME")));
    }

    #[test]
    fn test_invalid_port() {
        let mut pairs = MEDIA.to_vec();
        pairs.push(("PORT", "eighty"));
        let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert_eq!(err.to_string(), "invalid value 'eighty' for PORT");
    }
}
