//! Profile extraction module.
//!
//! This module provides:
//! - Flat, fixed-shape user and media records
//! - Document-to-record mapping with sentinel defaults
//! - The memoizing scraper

pub mod extract;
pub mod record;
pub mod scraper;

pub use extract::{build_media_records, build_user_record, MAX_MEDIA_ITEMS};
pub use record::{group_thousands, MediaKind, MediaRecord, UserRecord, NOT_AVAILABLE};
pub use scraper::{ProfileFetcher, ProfileScraper, ScrapeOutcome, ScrapedProfile};
