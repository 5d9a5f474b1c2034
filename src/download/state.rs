//! Presentation-side counters.

/// Per-profile counters for the statistics block.
#[derive(Debug, Default)]
pub struct DownloadState {
    pub username: String,
    pub videos_shown: u64,
    pub images_shown: u64,
    pub exports_written: u64,
    pub assets_downloaded: u64,
    pub assets_failed: u64,
}

impl DownloadState {
    /// Create a new state for a profile.
    pub fn new(username: String) -> Self {
        Self {
            username,
            ..Default::default()
        }
    }

    /// Record one successfully downloaded asset.
    pub fn mark_asset_downloaded(&mut self) {
        self.assets_downloaded += 1;
    }

    /// Record one failed asset.
    pub fn mark_asset_failed(&mut self) {
        self.assets_failed += 1;
    }

    /// Record one written export file.
    pub fn mark_export_written(&mut self) {
        self.exports_written += 1;
    }
}

/// Session-wide counters across all profiles.
#[derive(Debug, Default)]
pub struct GlobalState {
    pub profiles_processed: u64,
    pub profiles_failed: u64,
    pub exports_written: u64,
    pub assets_downloaded: u64,
    pub assets_failed: u64,
}

impl GlobalState {
    /// Fold one profile's counters into the session totals.
    pub fn add_profile_stats(&mut self, state: &DownloadState) {
        self.exports_written += state.exports_written;
        self.assets_downloaded += state.assets_downloaded;
        self.assets_failed += state.assets_failed;
        self.profiles_processed += 1;
    }

    /// Mark a profile as failed.
    pub fn mark_profile_failed(&mut self) {
        self.profiles_failed += 1;
    }
}
