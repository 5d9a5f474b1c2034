//! Flat profile and media records.
//!
//! These are fixed-shape display records: every field is always present,
//! with a sentinel standing in for anything the source document omitted, so
//! consumers never need existence checks.

use serde::Serialize;

/// Placeholder for source fields absent from the document.
pub const NOT_AVAILABLE: &str = "N/A";

/// Kind of media content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    /// Lowercase name, used for export file names (`video_data.json`).
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Image => "image",
        }
    }

    /// Section heading for the terminal report.
    pub fn section_title(&self) -> &'static str {
        match self {
            MediaKind::Video => "Videos",
            MediaKind::Image => "Images",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat mapping of a profile's metadata.
///
/// `followers` and `following` are thousands-grouped display strings; the
/// remaining counts stay raw integers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRecord {
    pub username: String,
    pub full_name: String,
    pub id: String,
    pub category: String,
    pub business_category: String,
    pub phone: String,
    pub email: String,
    pub biography: String,
    pub bio_links: Vec<String>,
    pub homepage: String,
    pub followers: String,
    pub following: String,
    pub facebook_id: String,
    pub is_private: bool,
    pub is_verified: bool,
    pub profile_pic_url: String,
    pub video_count: u64,
    pub image_count: u64,
    pub saved_count: u64,
    pub collections_count: u64,
    pub related_profiles: Vec<String>,
}

/// Flat mapping of one timeline media item.
///
/// The shape is shared by both kinds: `video_url` is meaningful for videos
/// and `accessibility_caption` for images; each holds the sentinel on the
/// other kind. `duration_seconds` is `0.0` for anything without a duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaRecord {
    pub kind: MediaKind,
    pub id: String,
    pub title: String,
    pub shortcode: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub comments_disabled: bool,
    pub taken_at: i64,
    pub tagged_users: Vec<String>,
    pub captions: Vec<String>,
    pub location: String,
    pub accessibility_caption: String,
    pub duration_seconds: f64,
}

/// Format a count with thousands separators: `1234567` → `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(1_000_000_000), "1,000,000,000");
    }

    #[test]
    fn test_media_kind_names() {
        assert_eq!(MediaKind::Video.as_str(), "video");
        assert_eq!(MediaKind::Image.to_string(), "image");
        assert_eq!(MediaKind::Image.section_title(), "Images");
    }
}
