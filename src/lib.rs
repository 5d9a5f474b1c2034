//! Instagram Profile Scraper
//!
//! This library fetches a public Instagram profile's metadata and recent
//! media via the unofficial `web_profile_info` JSON endpoint.
//!
//! # Features
//!
//! - Fixed-shape user and media records with sentinel defaults
//! - Up to five recent videos and five recent images per profile
//! - Per-username memoization of scrape outcomes
//! - Generic cursor pagination
//! - JSON export of displayed media lists
//! - Optional display-asset downloads through the same client
//!
//! # Example
//!
//! ```no_run
//! use instagram_scraper::{Config, InstagramApi, ProfileScraper, ScrapeOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let api = InstagramApi::new(&config.client)?;
//!     let scraper = ProfileScraper::new(api);
//!
//!     match scraper.scrape("natgeo").await {
//!         ScrapeOutcome::Profile(profile) => {
//!             println!("{} has {} followers", profile.user.username, profile.user.followers);
//!         }
//!         ScrapeOutcome::Failed(message) => eprintln!("{}", message),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod output;
pub mod profile;

// Re-exports for convenience
pub use api::{fetch_paginated, InstagramApi, PageFetcher};
pub use config::{Config, DetailLevel, SortKey};
pub use download::{download_asset, DownloadState, GlobalState};
pub use error::{Error, Result};
pub use profile::{
    MediaKind, MediaRecord, ProfileScraper, ScrapeOutcome, ScrapedProfile, UserRecord,
};
