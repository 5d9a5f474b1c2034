//! Terminal report rendering.
//!
//! Sorting here is a stateless transformation over already-extracted
//! records; the extraction order handed over by the scraper is never
//! mutated, callers pass an owned copy.

use chrono::{LocalResult, TimeZone, Utc};
use console::style;

use crate::config::{DetailLevel, SortKey};
use crate::profile::{MediaKind, MediaRecord, UserRecord, NOT_AVAILABLE};

/// Sort a media list in place, descending by the selected key. Ties keep
/// their extracted order.
pub fn sort_media(records: &mut [MediaRecord], key: SortKey) {
    match key {
        SortKey::Likes => records.sort_by(|a, b| b.like_count.cmp(&a.like_count)),
        SortKey::Comments => records.sort_by(|a, b| b.comment_count.cmp(&a.comment_count)),
        SortKey::Date => records.sort_by(|a, b| b.taken_at.cmp(&a.taken_at)),
    }
}

/// Print the full user information block.
pub fn print_user_report(user: &UserRecord) {
    println!();
    println!("{}", style(format!("Profile: {}", user.username)).bold());
    println!("  Full name:         {}", user.full_name);
    println!("  ID:                {}", user.id);
    println!("  Category:          {}", user.category);
    println!("  Business category: {}", user.business_category);
    println!("  Phone:             {}", user.phone);
    println!("  Email:             {}", user.email);
    println!("  Biography:         {}", user.biography);
    println!("  Bio links:         {}", join_or_na(&user.bio_links));
    println!("  Homepage:          {}", user.homepage);
    println!("  Followers:         {}", user.followers);
    println!("  Following:         {}", user.following);
    println!("  Facebook ID:       {}", user.facebook_id);
    println!("  Private:           {}", yes_no(user.is_private));
    println!("  Verified:          {}", yes_no(user.is_verified));
    println!("  Profile picture:   {}", user.profile_pic_url);
    println!("  Videos:            {}", user.video_count);
    println!("  Images:            {}", user.image_count);
    println!("  Saved:             {}", user.saved_count);
    println!("  Collections:       {}", user.collections_count);
    println!("  Related profiles:  {}", join_or_na(&user.related_profiles));
}

/// Print one media section (already sorted for display).
pub fn print_media_section(kind: MediaKind, records: &[MediaRecord], detail: DetailLevel) {
    println!();
    println!(
        "{}",
        style(format!("{} ({} shown)", kind.section_title(), records.len())).bold()
    );

    if records.is_empty() {
        println!("  No {}s found.", kind);
        return;
    }

    for record in records {
        match detail {
            DetailLevel::Summary => print_media_summary(record),
            DetailLevel::Full => print_media_detail(record),
        }
    }
}

fn print_media_summary(record: &MediaRecord) {
    println!(
        "  {}  {} likes, {} comments, {}",
        style(&record.shortcode).bold(),
        record.like_count,
        record.comment_count,
        format_taken_at(record.taken_at)
    );
}

fn print_media_detail(record: &MediaRecord) {
    println!();
    println!("  {}", style(format!("{} {}", record.kind, record.id)).bold());
    println!("    Title:        {}", record.title);
    println!("    Shortcode:    {}", record.shortcode);
    println!("    Likes:        {}", record.like_count);
    println!("    Comments:     {}", record.comment_count);
    if record.comments_disabled {
        println!("    Comments are disabled");
    }
    println!("    Views:        {}", record.view_count);
    println!("    Location:     {}", record.location);
    println!("    Tagged users: {}", join_or_na(&record.tagged_users));
    println!("    Captions:     {}", join_or_na(&record.captions));
    println!("    Taken at:     {}", format_taken_at(record.taken_at));
    println!("    Thumbnail:    {}", record.thumbnail_url);

    match record.kind {
        MediaKind::Video => {
            println!("    Play URL:     {}", record.video_url);
            println!("    Duration:     {:.1}s", record.duration_seconds);
        }
        MediaKind::Image => {
            println!("    Alt text:     {}", record.accessibility_caption);
        }
    }
}

/// Render a Unix timestamp as UTC `YYYY-MM-DD HH:MM:SS`; the zero sentinel
/// renders as the not-available placeholder.
fn format_taken_at(taken_at: i64) -> String {
    if taken_at == 0 {
        return NOT_AVAILABLE.to_string();
    }

    match Utc.timestamp_opt(taken_at, 0) {
        LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn join_or_na(values: &[String]) -> String {
    if values.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        values.join(", ")
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
