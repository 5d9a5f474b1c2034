//! Asset download module.
//!
//! This module provides:
//! - Sequential display-asset downloading with per-asset error isolation
//! - Per-profile and session-wide counters

pub mod asset;
pub mod state;

pub use asset::download_asset;
pub use state::{DownloadState, GlobalState};
