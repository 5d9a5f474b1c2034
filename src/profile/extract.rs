//! Mapping from the nested profile document to flat records.
//!
//! Every lookup degrades independently: a missing sub-object yields the
//! field's sentinel, never an error. Normalization happens here, once, so
//! nothing downstream deals with optional fields.

use crate::api::types::{MediaEdge, MediaNode, Timeline, UserNode};
use crate::profile::record::{group_thousands, MediaKind, MediaRecord, UserRecord, NOT_AVAILABLE};

/// Maximum number of media entries extracted per timeline, regardless of
/// how many exist upstream.
pub const MAX_MEDIA_ITEMS: usize = 5;

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Build the flat user record from the `data.user` node.
pub fn build_user_record(user: &UserNode) -> UserRecord {
    UserRecord {
        username: text(&user.username),
        full_name: text(&user.full_name),
        id: text(&user.id),
        category: text(&user.category_name),
        business_category: text(&user.business_category_name),
        phone: text(&user.business_phone_number),
        email: text(&user.business_email),
        biography: text(&user.biography),
        // Entries without a URL are dropped rather than padded with the
        // sentinel; an empty list is the sentinel here.
        bio_links: user.bio_links.iter().filter_map(|l| l.url.clone()).collect(),
        homepage: text(&user.external_url),
        followers: group_thousands(user.edge_followed_by.count.unwrap_or(0)),
        following: group_thousands(user.edge_follow.count.unwrap_or(0)),
        facebook_id: text(&user.fbid),
        is_private: user.is_private.unwrap_or(false),
        is_verified: user.is_verified.unwrap_or(false),
        profile_pic_url: text(&user.profile_pic_url_hd),
        video_count: user.edge_felix_video_timeline.count.unwrap_or(0),
        image_count: user.edge_owner_to_timeline_media.count.unwrap_or(0),
        saved_count: user.edge_saved_media.count.unwrap_or(0),
        collections_count: user.edge_saved_media.count.unwrap_or(0),
        related_profiles: user
            .edge_related_profiles
            .edges
            .iter()
            .map(|e| {
                e.node
                    .as_ref()
                    .and_then(|n| n.username.clone())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string())
            })
            .collect(),
    }
}

/// Extract at most [`MAX_MEDIA_ITEMS`] records from a timeline edge list,
/// preserving upstream order. No sorting or filtering happens here.
pub fn build_media_records(timeline: &Timeline, kind: MediaKind) -> Vec<MediaRecord> {
    timeline
        .edges
        .iter()
        .take(MAX_MEDIA_ITEMS)
        .map(|edge| build_media_record(edge, kind))
        .collect()
}

fn build_media_record(edge: &MediaEdge, kind: MediaKind) -> MediaRecord {
    // An edge without a node still yields a full-shape record of sentinels.
    let empty = MediaNode::default();
    let node = edge.node.as_ref().unwrap_or(&empty);

    MediaRecord {
        kind,
        id: text(&node.id),
        title: text(&node.title),
        shortcode: text(&node.shortcode),
        thumbnail_url: text(&node.display_url),
        video_url: match kind {
            MediaKind::Video => text(&node.video_url),
            MediaKind::Image => NOT_AVAILABLE.to_string(),
        },
        view_count: node.video_view_count.unwrap_or(0),
        like_count: node.edge_liked_by.count.unwrap_or(0),
        comment_count: node.edge_media_to_comment.count.unwrap_or(0),
        comments_disabled: node.comments_disabled.unwrap_or(false),
        taken_at: node.taken_at_timestamp.unwrap_or(0),
        tagged_users: node
            .edge_media_to_tagged_user
            .edges
            .iter()
            .map(|e| {
                e.node
                    .as_ref()
                    .and_then(|n| n.username.clone())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string())
            })
            .collect(),
        captions: node
            .edge_media_to_caption
            .edges
            .iter()
            .map(|e| {
                e.node
                    .as_ref()
                    .and_then(|n| n.text.clone())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string())
            })
            .collect(),
        location: node
            .location
            .as_ref()
            .and_then(|l| l.name.clone())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        accessibility_caption: match kind {
            MediaKind::Image => text(&node.accessibility_caption),
            MediaKind::Video => NOT_AVAILABLE.to_string(),
        },
        duration_seconds: node.video_duration.unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::UserNode;

    fn user_from_json(json: &str) -> UserNode {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_user_record_from_full_document() {
        let user = user_from_json(
            r#"{
                "username": "natgeo",
                "full_name": "National Geographic",
                "id": "787132",
                "category_name": "Magazine",
                "biography": "Experience the world",
                "bio_links": [{"url": "https://example.com/a"}, {}, {"url": "https://example.com/b"}],
                "external_url": "https://www.nationalgeographic.com",
                "edge_followed_by": {"count": 1234567},
                "edge_follow": {"count": 140},
                "is_private": false,
                "is_verified": true,
                "profile_pic_url_hd": "https://cdn.example.com/pic.jpg",
                "edge_felix_video_timeline": {"count": 88, "edges": []},
                "edge_owner_to_timeline_media": {"count": 29000, "edges": []},
                "edge_saved_media": {"count": 3},
                "edge_related_profiles": {"edges": [{"node": {"username": "natgeotravel"}}, {"node": {}}]}
            }"#,
        );

        let record = build_user_record(&user);

        assert_eq!(record.username, "natgeo");
        assert_eq!(record.full_name, "National Geographic");
        assert_eq!(record.followers, "1,234,567");
        assert_eq!(record.following, "140");
        assert_eq!(record.video_count, 88);
        assert_eq!(record.image_count, 29000);
        assert_eq!(record.saved_count, 3);
        assert_eq!(record.collections_count, 3);
        assert!(record.is_verified);
        assert!(!record.is_private);
        assert_eq!(
            record.bio_links,
            vec!["https://example.com/a", "https://example.com/b"]
        );
        assert_eq!(record.related_profiles, vec!["natgeotravel", "N/A"]);
        // Fields absent from the document come back as sentinels.
        assert_eq!(record.phone, "N/A");
        assert_eq!(record.email, "N/A");
        assert_eq!(record.facebook_id, "N/A");
    }

    #[test]
    fn test_user_record_from_empty_document_is_all_sentinels() {
        let user = user_from_json("{}");
        let record = build_user_record(&user);

        assert_eq!(record.username, "N/A");
        assert_eq!(record.biography, "N/A");
        assert_eq!(record.followers, "0");
        assert_eq!(record.following, "0");
        assert_eq!(record.video_count, 0);
        assert!(!record.is_private);
        assert!(record.bio_links.is_empty());
        assert!(record.related_profiles.is_empty());
    }

    #[test]
    fn test_media_records_capped_and_ordered() {
        let edges: Vec<String> = (1..=7)
            .map(|i| format!(r#"{{"node": {{"id": "{}", "shortcode": "sc{}"}}}}"#, i, i))
            .collect();
        let timeline: Timeline =
            serde_json::from_str(&format!(r#"{{"count": 7, "edges": [{}]}}"#, edges.join(",")))
                .unwrap();

        let records = build_media_records(&timeline, MediaKind::Image);

        assert_eq!(records.len(), MAX_MEDIA_ITEMS);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_video_record_fields() {
        let timeline: Timeline = serde_json::from_str(
            r#"{"edges": [{"node": {
                "id": "9001",
                "title": "Clip",
                "shortcode": "AbCd",
                "display_url": "https://cdn.example.com/thumb.jpg",
                "video_url": "https://cdn.example.com/clip.mp4",
                "video_view_count": 4200,
                "video_duration": 12.5,
                "taken_at_timestamp": 1700000000,
                "comments_disabled": true,
                "edge_liked_by": {"count": 300},
                "edge_media_to_comment": {"count": 25},
                "edge_media_to_tagged_user": {"edges": [{"node": {"username": "friend"}}]},
                "edge_media_to_caption": {"edges": [{"node": {"text": "hello"}}]},
                "location": {"name": "Reykjavik"}
            }}]}"#,
        )
        .unwrap();

        let records = build_media_records(&timeline, MediaKind::Video);
        assert_eq!(records.len(), 1);
        let record = &records[0];

        assert_eq!(record.kind, MediaKind::Video);
        assert_eq!(record.video_url, "https://cdn.example.com/clip.mp4");
        assert_eq!(record.view_count, 4200);
        assert_eq!(record.like_count, 300);
        assert_eq!(record.comment_count, 25);
        assert!(record.comments_disabled);
        assert_eq!(record.taken_at, 1700000000);
        assert_eq!(record.tagged_users, vec!["friend"]);
        assert_eq!(record.captions, vec!["hello"]);
        assert_eq!(record.location, "Reykjavik");
        assert_eq!(record.duration_seconds, 12.5);
        // Image-only field holds the sentinel on videos.
        assert_eq!(record.accessibility_caption, "N/A");
    }

    #[test]
    fn test_image_record_sentinels() {
        let timeline: Timeline = serde_json::from_str(
            r#"{"edges": [{"node": {"id": "77", "accessibility_caption": "A mountain"}}]}"#,
        )
        .unwrap();

        let records = build_media_records(&timeline, MediaKind::Image);
        let record = &records[0];

        assert_eq!(record.kind, MediaKind::Image);
        assert_eq!(record.accessibility_caption, "A mountain");
        // Video-only fields hold sentinels on images.
        assert_eq!(record.video_url, "N/A");
        assert_eq!(record.duration_seconds, 0.0);
        assert_eq!(record.taken_at, 0);
        assert_eq!(record.location, "N/A");
    }

    #[test]
    fn test_edge_without_node_yields_sentinel_record() {
        let timeline: Timeline = serde_json::from_str(r#"{"edges": [{}]}"#).unwrap();

        let records = build_media_records(&timeline, MediaKind::Image);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "N/A");
        assert_eq!(records[0].like_count, 0);
    }
}
