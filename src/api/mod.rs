//! Instagram web API module.
//!
//! This module provides:
//! - HTTP client with the fixed browser-like header set
//! - Generic cursor pagination
//! - Response document types

pub mod client;
pub mod pagination;
pub mod types;

pub use client::InstagramApi;
pub use pagination::{fetch_paginated, PageFetcher, PaginatedPage, Pagination};
pub use types::*;
