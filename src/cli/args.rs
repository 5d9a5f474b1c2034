//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, DetailLevel, SortKey};

/// Instagram profile scraper CLI.
#[derive(Parser, Debug)]
#[command(
    name = "instagram-scraper",
    version,
    about = "Scrape public Instagram profile metadata and recent media",
    long_about = "A CLI tool that fetches a public profile's metadata and its five most \
                  recent videos and images, renders them as a terminal report, and \
                  exports the media lists as JSON."
)]
pub struct Args {
    /// Username(s) to scrape.
    /// Can specify multiple users separated by spaces.
    #[arg(short, long, value_delimiter = ' ', num_args = 1..)]
    pub user: Option<Vec<String>>,

    /// Sort media sections by likes, comments or date (all descending).
    #[arg(long, value_enum)]
    pub sort: Option<SortKeyArg>,

    /// Print one line per media item instead of the expanded detail block.
    #[arg(long)]
    pub summary: bool,

    /// Directory for JSON exports and downloaded assets.
    #[arg(short = 'o', long = "export-dir")]
    pub export_directory: Option<PathBuf>,

    /// Skip writing the JSON export files.
    #[arg(long)]
    pub no_export: bool,

    /// Download display assets (profile picture, thumbnails, video files).
    #[arg(long)]
    pub download_assets: bool,

    /// Browser user agent string.
    #[arg(short = 'a', long = "user-agent", env = "IG_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Application id header value.
    #[arg(long = "app-id", env = "IG_APP_ID")]
    pub app_id: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide spinners and progress output.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI sort key argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortKeyArg {
    /// Most-liked first.
    Likes,
    /// Most-commented first.
    Comments,
    /// Newest first.
    Date,
}

impl From<SortKeyArg> for SortKey {
    fn from(arg: SortKeyArg) -> Self {
        match arg {
            SortKeyArg::Likes => SortKey::Likes,
            SortKeyArg::Comments => SortKey::Comments,
            SortKeyArg::Date => SortKey::Date,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        // Override usernames if provided
        if let Some(users) = self.user {
            config.targeted_profile.usernames = users;
        }

        // Override client headers if provided
        if let Some(user_agent) = self.user_agent {
            config.client.user_agent = user_agent;
        }

        if let Some(app_id) = self.app_id {
            config.client.app_id = app_id;
        }

        // Override display and export options if provided
        if let Some(sort) = self.sort {
            config.options.sort_by = sort.into();
        }

        if self.summary {
            config.options.detail = DetailLevel::Summary;
        }

        if let Some(dir) = self.export_directory {
            config.options.export_directory = dir;
        }

        // Boolean flags (only override if set to non-default)
        if self.no_export {
            config.options.export_json = false;
        }

        if self.download_assets {
            config.options.download_assets = true;
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}
