//! JSON export of displayed media lists.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::profile::{MediaKind, MediaRecord};

/// Write the displayed media list for `kind` as pretty-printed JSON to
/// `{media_type}_data.json` inside `directory`, creating the directory if
/// needed. The records are written in the order given, so a sorted view
/// exports in its sorted order. Returns the written path.
pub fn write_media_json(
    directory: &Path,
    kind: MediaKind,
    records: &[MediaRecord],
) -> Result<PathBuf> {
    fs::create_dir_all(directory)
        .map_err(|e| Error::Export(format!("{}: {}", directory.display(), e)))?;

    let path = directory.join(format!("{}_data.json", kind.as_str()));
    let json = serde_json::to_string_pretty(records)?;

    fs::write(&path, json).map_err(|e| Error::Export(format!("{}: {}", path.display(), e)))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::NOT_AVAILABLE;

    fn record(id: &str, likes: u64) -> MediaRecord {
        MediaRecord {
            kind: MediaKind::Video,
            id: id.to_string(),
            title: NOT_AVAILABLE.to_string(),
            shortcode: NOT_AVAILABLE.to_string(),
            thumbnail_url: NOT_AVAILABLE.to_string(),
            video_url: NOT_AVAILABLE.to_string(),
            view_count: 0,
            like_count: likes,
            comment_count: 0,
            comments_disabled: false,
            taken_at: 0,
            tagged_users: Vec::new(),
            captions: Vec::new(),
            location: NOT_AVAILABLE.to_string(),
            accessibility_caption: NOT_AVAILABLE.to_string(),
            duration_seconds: 0.0,
        }
    }

    #[test]
    fn test_export_writes_named_file_in_given_order() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![record("77", 9), record("12", 3)];

        let path = write_media_json(dir.path(), MediaKind::Video, &records).unwrap();

        assert_eq!(path.file_name().unwrap(), "video_data.json");
        let content = fs::read_to_string(&path).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["id"], "77");
        assert_eq!(parsed[1]["id"], "12");
        assert_eq!(parsed[0]["like_count"], 9);
        assert_eq!(parsed[0]["kind"], "video");
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("deep");

        let path = write_media_json(&nested, MediaKind::Image, &[]).unwrap();

        assert_eq!(path.file_name().unwrap(), "image_data.json");
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
