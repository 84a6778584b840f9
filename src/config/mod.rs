use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

const CONFIG_FILE: &str = "config.toml";

/// Fallbacks for a containerized demo instance. Real installations are
/// expected to set `[api]` in the config file or pass `--api`/`--url`.
pub const DEFAULT_API_KEY: &str = "c895e3636e813df4dbe9d01aed4bff0e14fc99b5";
pub const DEFAULT_BASE_URL: &str = "http://gogs.container.com/api/v1";

/// On-disk configuration, consulted after explicit flags and before the
/// built-in defaults. Read once per invocation, never written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub auth: AuthSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSection {
    pub key: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthSection {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl FileConfig {
    pub fn load() -> Result<Self> {
        let Some(config_file) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !config_file.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_file)
            .with_context(|| format!("Failed to read config file {}", config_file.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("gogs").join(CONFIG_FILE))
    }

    /// Base URL: explicit flag, else `[api] url`, else the demo default.
    /// A value present at a higher level is used verbatim.
    pub fn resolve_base_url(&self, flag: Option<&str>) -> String {
        flag.map(|s| s.to_string())
            .or_else(|| self.api.url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_sections() {
        let config = FileConfig::parse(
            r#"
            [api]
            key = "abc123"
            url = "https://git.internal.example/api/v1"

            [auth]
            username = "alice"
            password = "hunter2"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.key.as_deref(), Some("abc123"));
        assert_eq!(
            config.api.url.as_deref(),
            Some("https://git.internal.example/api/v1")
        );
        assert_eq!(config.auth.username.as_deref(), Some("alice"));
        assert_eq!(config.auth.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let config = FileConfig::parse("[api]\nurl = \"http://localhost:3000\"\n").unwrap();
        assert!(config.api.key.is_none());
        assert!(config.auth.username.is_none());
        assert!(config.auth.password.is_none());
    }

    #[test]
    fn base_url_prefers_flag_then_config_then_default() {
        let config = FileConfig::parse("[api]\nurl = \"http://from-config\"\n").unwrap();
        assert_eq!(
            config.resolve_base_url(Some("http://from-flag")),
            "http://from-flag"
        );
        assert_eq!(config.resolve_base_url(None), "http://from-config");

        let empty = FileConfig::default();
        assert_eq!(empty.resolve_base_url(None), DEFAULT_BASE_URL);
    }
}
