//! Display mode definitions shared by the config file and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Client-side sort applied to a media section before display and export.
/// All keys sort descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most-liked first (default).
    #[default]
    Likes,
    /// Most-commented first.
    Comments,
    /// Newest first.
    Date,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Likes => write!(f, "likes"),
            SortKey::Comments => write!(f, "comments"),
            SortKey::Date => write!(f, "date"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "likes" => Ok(SortKey::Likes),
            "comments" => Ok(SortKey::Comments),
            "date" => Ok(SortKey::Date),
            _ => Err(format!("Unknown sort key: {}", s)),
        }
    }
}

/// How much of each media item the report prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// One line per item.
    Summary,
    /// Expanded block per item (default).
    #[default]
    Full,
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailLevel::Summary => write!(f, "summary"),
            DetailLevel::Full => write!(f, "full"),
        }
    }
}

impl FromStr for DetailLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(DetailLevel::Summary),
            "full" => Ok(DetailLevel::Full),
            _ => Err(format!("Unknown detail level: {}", s)),
        }
    }
}
