use crate::{Error, Result};
use hypodesk_engine::FeedLayout;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. HYPODESK_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.hypodesk
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("HYPODESK_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("hypodesk"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".hypodesk"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Endpoints of the external services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Topic listing and save-for-now
    pub base_url: String,
    /// Hypothesis create/get/delete and file upload
    pub alt_base_url: String,
    /// Identity service
    pub auth_base_url: String,
    pub timeout_secs: u64,
    pub application_code: String,
    pub user_domain_id: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8010".to_string(),
            alt_base_url: "http://localhost:8000".to_string(),
            auth_base_url: "http://localhost:8002".to_string(),
            timeout_secs: 30,
            application_code: "compintel".to_string(),
            user_domain_id: "1".to_string(),
        }
    }
}

impl ApiConfig {
    /// Point every service at the same host.
    pub fn override_base(&mut self, url: &str) {
        let url = url.trim_end_matches('/').to_string();
        self.base_url = url.clone();
        self.alt_base_url = url.clone();
        self.auth_base_url = url;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { page_size: 100 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    #[serde(flatten)]
    pub layout: FeedLayout,
    /// JSON file replacing the bundled feed content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.table.page_size == 0 {
            return Err(Error::Config("table.page_size must be greater than 0".to_string()));
        }
        if self.feed.layout.max_items_per_page == 0 {
            return Err(Error::Config(
                "feed.max_items_per_page must be greater than 0".to_string(),
            ));
        }
        if self.feed.layout.medium_threshold > self.feed.layout.large_threshold {
            return Err(Error::Config(
                "feed.medium_threshold must not exceed feed.large_threshold".to_string(),
            ));
        }
        Ok(())
    }

    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.table.page_size).unwrap_or(NonZeroUsize::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.table.page_size, 100);
        assert_eq!(config.api.application_code, "compintel");
        assert_eq!(config.feed.layout.max_page_weight, 1200);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        let mut config = Config::default();
        config.table.page_size = 25;
        config.feed.layout.max_items_per_page = 4;
        config.api.override_base("http://127.0.0.1:9000/");

        config.save_to(&config_path)?;
        let loaded = Config::load_from(&config_path)?;

        assert_eq!(loaded, config);
        assert_eq!(loaded.api.auth_base_url, "http://127.0.0.1:9000");
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "[feed]\nmax_page_weight = 900\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.feed.layout.max_page_weight, 900);
        assert_eq!(loaded.feed.layout.small_weight, 150);
        assert_eq!(loaded.table.page_size, 100);
        Ok(())
    }

    #[test]
    fn test_zero_page_size_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "[table]\npage_size = 0\n")?;

        assert!(matches!(Config::load_from(&config_path), Err(Error::Config(_))));
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("missing.toml"))?;

        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_workspace_path(Some("/tmp/hypodesk-explicit"))?;
        assert_eq!(path, PathBuf::from("/tmp/hypodesk-explicit"));
        Ok(())
    }
}
