//! Configuration structures and loading logic.

use crate::config::modes::{DetailLevel, SortKey};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub targeted_profile: ProfileConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Profile targeting configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// List of usernames to scrape, in order.
    #[serde(default)]
    pub usernames: Vec<String>,
}

/// HTTP client header configuration.
///
/// The defaults are the values the endpoint expects from a browser; there is
/// rarely a reason to change them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Browser user agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Application-identifying header value (`x-ig-app-id`).
    #[serde(default = "default_app_id")]
    pub app_id: String,

    /// `Accept-Language` header value.
    #[serde(default = "default_accept_language")]
    pub accept_language: String,
}

/// Display and export options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Sort applied to each media section (likes, comments, date).
    #[serde(default)]
    pub sort_by: SortKey,

    /// Per-item detail level in the report (summary, full).
    #[serde(default)]
    pub detail: DetailLevel,

    /// Whether to write `{media_type}_data.json` export files.
    #[serde(default = "default_true")]
    pub export_json: bool,

    /// Directory for exports and downloaded assets.
    #[serde(default = "default_export_directory")]
    pub export_directory: PathBuf,

    /// Whether to download display assets (profile picture, thumbnails,
    /// video files).
    #[serde(default)]
    pub download_assets: bool,

    /// Whether to show spinners and progress bars.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            app_id: default_app_id(),
            accept_language: default_accept_language(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            sort_by: SortKey::default(),
            detail: DetailLevel::default(),
            export_json: true,
            export_directory: default_export_directory(),
            download_assets: false,
            show_progress: true,
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/62.0.3202.94 Safari/537.36".to_string()
}

fn default_app_id() -> String {
    "936619743392459".to_string()
}

fn default_accept_language() -> String {
    "en-US,en;q=0.9,ru;q=0.8".to_string()
}

fn default_export_directory() -> PathBuf {
    PathBuf::from("export")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_expected_headers() {
        let config = Config::default();

        assert_eq!(config.client.app_id, "936619743392459");
        assert!(config.client.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(config.client.accept_language, "en-US,en;q=0.9,ru;q=0.8");
        assert!(config.options.export_json);
        assert!(!config.options.download_assets);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [targeted_profile]
            usernames = ["natgeo"]

            [options]
            sort_by = "date"
            detail = "summary"
            "#,
        )
        .unwrap();

        assert_eq!(config.targeted_profile.usernames, vec!["natgeo"]);
        assert_eq!(config.options.sort_by, SortKey::Date);
        assert_eq!(config.options.detail, DetailLevel::Summary);
        // Untouched sections keep their defaults.
        assert_eq!(config.client.app_id, "936619743392459");
        assert_eq!(config.options.export_directory, PathBuf::from("export"));
    }
}
