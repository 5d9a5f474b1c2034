//! Profile scraping with per-username memoization.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::sync::Mutex;

use crate::api::types::WebProfileDocument;
use crate::api::InstagramApi;
use crate::error::{Error, Result};
use crate::profile::extract::{build_media_records, build_user_record};
use crate::profile::record::{MediaKind, MediaRecord, UserRecord};

/// Transport seam for the profile request.
#[async_trait]
pub trait ProfileFetcher {
    /// Fetch the raw profile document, returning the status and body.
    async fn fetch_profile(&self, username: &str) -> Result<(StatusCode, Vec<u8>)>;
}

#[async_trait]
impl ProfileFetcher for InstagramApi {
    async fn fetch_profile(&self, username: &str) -> Result<(StatusCode, Vec<u8>)> {
        self.get_profile_info(username).await
    }
}

/// A fully extracted profile: the user record plus up to five recent videos
/// and five recent images, in upstream order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedProfile {
    pub user: UserRecord,
    pub videos: Vec<MediaRecord>,
    pub images: Vec<MediaRecord>,
}

/// Outcome of a scrape. A failure carries the reported message and implies
/// two empty media lists.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrapeOutcome {
    Profile(Box<ScrapedProfile>),
    Failed(String),
}

/// Scrapes profiles, memoizing every outcome by username for the process
/// lifetime. Failures are memoized too: a username that came back "not
/// found" is not re-requested.
pub struct ProfileScraper<F = InstagramApi> {
    fetcher: F,
    cache: Mutex<HashMap<String, ScrapeOutcome>>,
}

impl<F: ProfileFetcher> ProfileScraper<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Access the underlying fetcher, shared with asset downloads so both
    /// paths present the same client to the upstream.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Scrape a username, returning the memoized outcome on repeat calls.
    ///
    /// Never returns an error: every failure path collapses into
    /// [`ScrapeOutcome::Failed`] with a human-readable message. The cache
    /// lock is held across the request, so concurrent duplicate calls for
    /// one username collapse into a single upstream request (calls for
    /// distinct usernames serialize behind the same lock).
    pub async fn scrape(&self, username: &str) -> ScrapeOutcome {
        let mut cache = self.cache.lock().await;

        if let Some(outcome) = cache.get(username) {
            tracing::debug!("memoized outcome for {}", username);
            return outcome.clone();
        }

        let outcome = match self.scrape_fresh(username).await {
            Ok(profile) => ScrapeOutcome::Profile(Box::new(profile)),
            Err(e) => ScrapeOutcome::Failed(e.to_string()),
        };

        cache.insert(username.to_string(), outcome.clone());
        outcome
    }

    async fn scrape_fresh(&self, username: &str) -> Result<ScrapedProfile> {
        let (status, body) = self
            .fetcher
            .fetch_profile(username)
            .await
            .map_err(|e| Error::Unexpected(e.to_string()))?;

        if !status.is_success() {
            return Err(Error::ProfileStatus(status.as_u16()));
        }

        let value: serde_json::Value =
            serde_json::from_slice(&body).map_err(Error::ProfileDecode)?;

        // The body was valid JSON; a shape that still refuses to map (a
        // list where an object belongs, a number where a string belongs)
        // falls into the catch-all instead of the decode error.
        let document: WebProfileDocument =
            serde_json::from_value(value).map_err(|e| Error::Unexpected(e.to_string()))?;

        let user = document
            .data
            .user
            .ok_or_else(|| Error::ProfileNotFound(username.to_string()))?;

        Ok(ScrapedProfile {
            user: build_user_record(&user),
            videos: build_media_records(&user.edge_felix_video_timeline, MediaKind::Video),
            images: build_media_records(&user.edge_owner_to_timeline_media, MediaKind::Image),
        })
    }
}
