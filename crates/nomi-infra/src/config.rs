//! Client configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.nomi/` in production),
//! layers the `NOMI_*` environment variables on top, and produces the
//! [`ClientConfig`] that is handed to [`crate::nomi::NomiClient::new`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use secrecy::SecretString;

use nomi_types::config::FileConfig;
use nomi_types::error::ConfigError;

/// Production endpoint used when neither the file nor the environment sets one.
pub const DEFAULT_BASE_URL: &str = "https://api.nomi.ai/v1";

pub const ENV_API_KEY: &str = "NOMI_API_KEY";
pub const ENV_BASE_URL: &str = "NOMI_BASE_URL";
pub const ENV_DATA_DIR: &str = "NOMI_DATA_DIR";

/// Fully resolved settings for talking to the service.
///
/// Built once at startup and passed explicitly; nothing reads the
/// environment after this point.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base endpoint without a trailing slash.
    pub base_url: String,
    pub api_key: SecretString,
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: SecretString::from(api_key.into()),
            request_timeout: Duration::from_secs(FileConfig::default().request_timeout_secs),
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Resolve the data directory.
///
/// Priority: `NOMI_DATA_DIR`, then `~/.nomi`, then `./.nomi`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".nomi");
    }

    PathBuf::from(".nomi")
}

/// Load `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`FileConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and returns the default.
pub async fn load_file_config(data_dir: &Path) -> FileConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return FileConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return FileConfig::default();
        }
    };

    match toml::from_str::<FileConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            FileConfig::default()
        }
    }
}

/// Merge the file config with environment values.
///
/// `env` looks up a variable by name; environment values win over the file.
/// Blank values count as unset.
pub fn resolve_client_config(
    file: FileConfig,
    env: impl Fn(&str) -> Option<String>,
    config_path: &Path,
) -> Result<ClientConfig, ConfigError> {
    let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

    let api_key = non_blank(env(ENV_API_KEY))
        .or_else(|| non_blank(file.api_key))
        .ok_or_else(|| ConfigError::MissingApiKey {
            config_path: config_path.display().to_string(),
        })?;

    let base_url = non_blank(env(ENV_BASE_URL))
        .or_else(|| non_blank(file.base_url))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let base_url = base_url.trim().trim_end_matches('/').to_string();

    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(base_url));
    }

    Ok(ClientConfig {
        base_url,
        api_key: SecretString::from(api_key.trim().to_string()),
        request_timeout: Duration::from_secs(file.request_timeout_secs),
    })
}

/// Load the client configuration from the data directory and process environment.
pub async fn load_client_config() -> Result<ClientConfig, ConfigError> {
    let data_dir = resolve_data_dir();
    let file = load_file_config(&data_dir).await;
    resolve_client_config(
        file,
        |key| std::env::var(key).ok(),
        &data_dir.join("config.toml"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[tokio::test]
    async fn load_file_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_file_config(tmp.path()).await;
        assert_eq!(config, FileConfig::default());
    }

    #[tokio::test]
    async fn load_file_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
base_url = "http://localhost:9000/v1"
api_key = "from-file"
request_timeout_secs = 5
"#,
        )
        .await
        .unwrap();

        let config = load_file_config(tmp.path()).await;
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:9000/v1"));
        assert_eq!(config.api_key.as_deref(), Some("from-file"));
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[tokio::test]
    async fn load_file_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_file_config(tmp.path()).await;
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn resolve_env_overrides_file() {
        let file = FileConfig {
            base_url: Some("http://file.example/v1".into()),
            api_key: Some("file-key".into()),
            request_timeout_secs: 7,
        };
        let env = env_of(&[
            (ENV_API_KEY, "env-key"),
            (ENV_BASE_URL, "http://env.example/v1/"),
        ]);

        let config = resolve_client_config(file, env, Path::new("config.toml")).unwrap();
        assert_eq!(config.api_key.expose_secret(), "env-key");
        assert_eq!(config.base_url, "http://env.example/v1");
        assert_eq!(config.request_timeout, Duration::from_secs(7));
    }

    #[test]
    fn resolve_falls_back_to_file_then_default() {
        let file = FileConfig {
            api_key: Some("file-key".into()),
            ..FileConfig::default()
        };
        let config = resolve_client_config(file, env_of(&[]), Path::new("config.toml")).unwrap();
        assert_eq!(config.api_key.expose_secret(), "file-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn resolve_missing_key_is_an_error() {
        let env = env_of(&[(ENV_API_KEY, "   ")]);
        let err = resolve_client_config(FileConfig::default(), env, Path::new("/x/config.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { .. }));
    }

    #[test]
    fn resolve_rejects_non_http_base_url() {
        let env = env_of(&[(ENV_API_KEY, "k"), (ENV_BASE_URL, "ftp://nope")]);
        let err =
            resolve_client_config(FileConfig::default(), env, Path::new("config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn client_config_new_trims_trailing_slash() {
        let config = ClientConfig::new("http://127.0.0.1:8080/", "k");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }
}
