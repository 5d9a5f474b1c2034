//! Generic cursor pagination.
//!
//! Follows the `pagination.next_url` cursor embedded in each
//! `{"data": [...], "pagination": {...}}` response, accumulating raw items
//! up to a caller-supplied limit. The cursor is opaque; nothing detects a
//! cursor that loops back on itself, so `limit` is the only bound on the
//! number of requests when every page yields at least one item.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// Transport seam for the pagination loop.
#[async_trait]
pub trait PageFetcher {
    /// Fetch the raw body at `url`.
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

/// One page of a paginated listing; consumed once and discarded.
#[derive(Debug, Default, Deserialize)]
pub struct PaginatedPage {
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// The `pagination` wrapper carrying the next-page cursor.
#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub next_url: Option<String>,
}

/// Fetch items page by page until `limit` items are accumulated or the
/// listing is exhausted.
///
/// A page whose `data` is absent, empty, or not a list terminates the loop,
/// as does a body that fails to parse as JSON — end-of-data and unexpected
/// responses are not distinguished. The result is truncated to at most
/// `limit` items, in the order the pages yielded them.
pub async fn fetch_paginated<F>(fetcher: &F, start_url: &str, limit: usize) -> Result<Vec<Value>>
where
    F: PageFetcher + ?Sized,
{
    let mut items: Vec<Value> = Vec::new();
    let mut url = start_url.to_string();

    while items.len() < limit {
        let body = fetcher.get_bytes(&url).await?;

        let page: PaginatedPage = match serde_json::from_slice(&body) {
            Ok(page) => page,
            Err(e) => {
                tracing::debug!("pagination stopped: page body is not valid JSON: {}", e);
                break;
            }
        };

        match page.data {
            Value::Array(entries) if !entries.is_empty() => items.extend(entries),
            _ => {
                tracing::debug!("pagination stopped: page has no data items");
                break;
            }
        }

        if items.len() >= limit {
            break;
        }

        match page.pagination.and_then(|p| p.next_url) {
            Some(next) => url = next,
            None => break,
        }
    }

    items.truncate(limit);
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Serves a fixed sequence of bodies and records the requested URLs.
    struct ScriptedFetcher {
        bodies: Mutex<Vec<String>>,
        requested: Mutex<Vec<String>>,
    }

    impl ScriptedFetcher {
        fn new(bodies: &[&str]) -> Self {
            Self {
                bodies: Mutex::new(bodies.iter().map(|b| b.to_string()).collect()),
                requested: Mutex::new(Vec::new()),
            }
        }

        fn request_count(&self) -> usize {
            self.requested.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PageFetcher for ScriptedFetcher {
        async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
            self.requested.lock().unwrap().push(url.to_string());
            let mut bodies = self.bodies.lock().unwrap();
            assert!(!bodies.is_empty(), "unexpected extra request to {}", url);
            Ok(bodies.remove(0).into_bytes())
        }
    }

    #[tokio::test]
    async fn test_two_pages_truncated_to_limit() {
        let fetcher = ScriptedFetcher::new(&[
            r#"{"data": [1, 2, 3], "pagination": {"next_url": "https://x.test/page2"}}"#,
            r#"{"data": [4, 5, 6, 7]}"#,
        ]);

        let items = fetch_paginated(&fetcher, "https://x.test/page1", 5)
            .await
            .unwrap();

        let values: Vec<i64> = items.iter().map(|v| v.as_i64().unwrap()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert_eq!(fetcher.request_count(), 2);
        assert_eq!(
            *fetcher.requested.lock().unwrap(),
            vec!["https://x.test/page1", "https://x.test/page2"]
        );
    }

    #[tokio::test]
    async fn test_empty_data_stops_after_one_request() {
        let fetcher = ScriptedFetcher::new(&[r#"{"data": []}"#]);

        let items = fetch_paginated(&fetcher, "https://x.test/page1", 5)
            .await
            .unwrap();

        assert!(items.is_empty());
        assert_eq!(fetcher.request_count(), 1);
    }

    #[tokio::test]
    async fn test_limit_reached_on_first_page_skips_cursor() {
        let fetcher = ScriptedFetcher::new(&[
            r#"{"data": [1, 2, 3, 4], "pagination": {"next_url": "https://x.test/never"}}"#,
        ]);

        let items = fetch_paginated(&fetcher, "https://x.test/page1", 3)
            .await
            .unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(fetcher.request_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_cursor_ends_short() {
        let fetcher = ScriptedFetcher::new(&[r#"{"data": [1, 2]}"#]);

        let items = fetch_paginated(&fetcher, "https://x.test/page1", 10)
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(fetcher.request_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_body_terminates_quietly() {
        let fetcher = ScriptedFetcher::new(&["not json at all"]);

        let items = fetch_paginated(&fetcher, "https://x.test/page1", 5)
            .await
            .unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_object_data_treated_as_no_items() {
        let fetcher = ScriptedFetcher::new(&[r#"{"data": {"user": {}}}"#]);

        let items = fetch_paginated(&fetcher, "https://x.test/page1", 5)
            .await
            .unwrap();

        assert!(items.is_empty());
        assert_eq!(fetcher.request_count(), 1);
    }
}
