//! Instagram web API HTTP client.

use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};

use crate::api::pagination::PageFetcher;
use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Instagram web API base URL.
const API_BASE: &str = "https://i.instagram.com";

/// Unauthenticated Instagram web client.
///
/// A single `reqwest::Client` carries the fixed header set the endpoint
/// expects from a browser (`x-ig-app-id`, user agent, language and encoding
/// preferences). Profile requests and asset fetches both go through this
/// client so the upstream sees one consistent synthetic client.
pub struct InstagramApi {
    client: Client,
}

impl InstagramApi {
    /// Build the shared HTTP client from the `[client]` configuration.
    pub fn new(settings: &ClientConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            "x-ig-app-id",
            parse_header_value("app_id", &settings.app_id)?,
        );
        headers.insert(
            header::ACCEPT_LANGUAGE,
            parse_header_value("accept_language", &settings.accept_language)?,
        );
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("*/*"));
        // Accept-Encoding (gzip, deflate, br) is added by the enabled reqwest
        // decompression features; setting it by hand would disable the
        // transparent decoding of the response body.

        let client = Client::builder()
            .user_agent(&settings.user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Issue a single GET and return the status code with the raw body.
    ///
    /// No retry, no timeout beyond the library default.
    pub async fn get(&self, url: &str) -> Result<(StatusCode, Vec<u8>)> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        let body = response.bytes().await?.to_vec();
        Ok((status, body))
    }

    /// Fetch the raw `web_profile_info` document for a username.
    pub async fn get_profile_info(&self, username: &str) -> Result<(StatusCode, Vec<u8>)> {
        let url = format!(
            "{}/api/v1/users/web_profile_info/?username={}",
            API_BASE, username
        );
        self.get(&url).await
    }

    /// Fetch a display asset (profile picture, thumbnail, video file) for
    /// streaming to disk. Non-success status is an error here, unlike the
    /// profile request where the caller inspects the code.
    pub async fn fetch_asset(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Asset(format!(
                "HTTP {} fetching {}",
                response.status(),
                url
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl PageFetcher for InstagramApi {
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        // Pagination parses whatever body comes back; the status code is
        // deliberately not inspected (see `fetch_paginated`).
        let (_status, body) = self.get(url).await?;
        Ok(body)
    }
}

fn parse_header_value(field: &str, value: &str) -> Result<header::HeaderValue> {
    value.parse().map_err(|_| Error::ConfigValidation {
        field: field.to_string(),
        message: format!("not a valid header value: {:?}", value),
    })
}
