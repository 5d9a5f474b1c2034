//! API response type definitions.
//!
//! The `web_profile_info` document is undocumented and shifts without
//! notice, so every field is optional or defaulted: a missing or null
//! sub-object degrades to an empty value instead of failing the whole
//! deserialization.

use serde::Deserialize;

/// Top-level `web_profile_info` response: `{"data": {"user": {...}}}`.
#[derive(Debug, Default, Deserialize)]
pub struct WebProfileDocument {
    #[serde(default)]
    pub data: ProfileContainer,
}

/// The `data` wrapper around the user object.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileContainer {
    #[serde(default)]
    pub user: Option<UserNode>,
}

/// The nested `data.user` profile object.
#[derive(Debug, Default, Deserialize)]
pub struct UserNode {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub business_category_name: Option<String>,
    #[serde(default)]
    pub business_phone_number: Option<String>,
    #[serde(default)]
    pub business_email: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub bio_links: Vec<BioLink>,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub edge_followed_by: EdgeCount,
    #[serde(default)]
    pub edge_follow: EdgeCount,
    #[serde(default)]
    pub fbid: Option<String>,
    #[serde(default)]
    pub is_private: Option<bool>,
    #[serde(default)]
    pub is_verified: Option<bool>,
    #[serde(default)]
    pub profile_pic_url_hd: Option<String>,
    #[serde(default)]
    pub edge_felix_video_timeline: Timeline,
    #[serde(default)]
    pub edge_owner_to_timeline_media: Timeline,
    #[serde(default)]
    pub edge_saved_media: EdgeCount,
    #[serde(default)]
    pub edge_related_profiles: RelatedProfiles,
}

/// A single entry of `user.bio_links`.
#[derive(Debug, Default, Deserialize)]
pub struct BioLink {
    #[serde(default)]
    pub url: Option<String>,
}

/// A `{count}` edge wrapper (followers, following, saved media).
#[derive(Debug, Default, Deserialize)]
pub struct EdgeCount {
    #[serde(default)]
    pub count: Option<u64>,
}

/// A media timeline edge list: `{count, edges: [{node: {...}}]}`.
#[derive(Debug, Default, Deserialize)]
pub struct Timeline {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub edges: Vec<MediaEdge>,
}

/// One `{node}` wrapper in a media timeline.
#[derive(Debug, Default, Deserialize)]
pub struct MediaEdge {
    #[serde(default)]
    pub node: Option<MediaNode>,
}

/// A single media item node from either timeline.
#[derive(Debug, Default, Deserialize)]
pub struct MediaNode {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub shortcode: Option<String>,
    #[serde(default)]
    pub display_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub video_view_count: Option<u64>,
    #[serde(default)]
    pub video_duration: Option<f64>,
    #[serde(default)]
    pub comments_disabled: Option<bool>,
    #[serde(default)]
    pub taken_at_timestamp: Option<i64>,
    #[serde(default)]
    pub accessibility_caption: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub edge_liked_by: EdgeCount,
    #[serde(default)]
    pub edge_media_to_comment: EdgeCount,
    #[serde(default)]
    pub edge_media_to_tagged_user: UserEdges,
    #[serde(default)]
    pub edge_media_to_caption: CaptionEdges,
}

/// Media location tag.
#[derive(Debug, Default, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub name: Option<String>,
}

/// Edge list of tagged users: `{edges: [{node: {username}}]}`.
#[derive(Debug, Default, Deserialize)]
pub struct UserEdges {
    #[serde(default)]
    pub edges: Vec<UserEdge>,
}

/// One tagged-user `{node}` wrapper.
#[derive(Debug, Default, Deserialize)]
pub struct UserEdge {
    #[serde(default)]
    pub node: Option<UsernameNode>,
}

/// A node carrying only a username.
#[derive(Debug, Default, Deserialize)]
pub struct UsernameNode {
    #[serde(default)]
    pub username: Option<String>,
}

/// Edge list of captions: `{edges: [{node: {text}}]}`.
#[derive(Debug, Default, Deserialize)]
pub struct CaptionEdges {
    #[serde(default)]
    pub edges: Vec<CaptionEdge>,
}

/// One caption `{node}` wrapper.
#[derive(Debug, Default, Deserialize)]
pub struct CaptionEdge {
    #[serde(default)]
    pub node: Option<CaptionNode>,
}

/// A node carrying a caption text.
#[derive(Debug, Default, Deserialize)]
pub struct CaptionNode {
    #[serde(default)]
    pub text: Option<String>,
}

/// Edge list of related profiles.
#[derive(Debug, Default, Deserialize)]
pub struct RelatedProfiles {
    #[serde(default)]
    pub edges: Vec<UserEdge>,
}
