//! Instagram Profile Scraper - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use instagram_scraper::{
    api::InstagramApi,
    cli::Args,
    config::{validate_config, Config},
    download::{download_asset, DownloadState, GlobalState},
    error::{exit_codes, Error, Result},
    output::{
        create_spinner, print_banner, print_config_summary, print_error, print_global_stats,
        print_info, print_media_section, print_profile_stats, print_success, print_user_report,
        print_warning, sort_media, write_media_json,
    },
    profile::{
        MediaKind, MediaRecord, ProfileScraper, ScrapeOutcome, ScrapedProfile, NOT_AVAILABLE,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Http(_) | Error::ProfileStatus(_) | Error::ProfileNotFound(_) => {
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                Error::Export(_) | Error::Io(_) => {
                    ExitCode::from(exit_codes::EXPORT_ERROR as u8)
                }
                Error::ProfilesFailed(_) => {
                    ExitCode::from(exit_codes::SOME_PROFILES_FAILED as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    // Print configuration summary
    let usernames = config.targeted_profile.usernames.clone();
    print_config_summary(
        &usernames,
        &config.options.sort_by.to_string(),
        &config.options.export_directory.display().to_string(),
    );

    // Initialize the shared HTTP client and the memoizing scraper
    let api = InstagramApi::new(&config.client)?;
    let scraper = ProfileScraper::new(api);

    // Initialize global state
    let mut global_state = GlobalState::default();

    // Process each profile
    for username in &usernames {
        print_info(&format!("Processing profile: {}", username));

        let spinner = config
            .options
            .show_progress
            .then(|| create_spinner(&format!("Scraping {}...", username)));
        let outcome = scraper.scrape(username).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        match outcome {
            ScrapeOutcome::Profile(profile) => {
                let state =
                    present_profile(scraper.fetcher(), &config, username, &profile).await?;
                print_profile_stats(&state);
                global_state.add_profile_stats(&state);
            }
            ScrapeOutcome::Failed(message) => {
                print_error(&format!("Failed to process {}: {}", username, message));
                global_state.mark_profile_failed();
            }
        }
    }

    // Print global statistics
    print_global_stats(&global_state);

    if global_state.profiles_failed > 0 {
        return Err(Error::ProfilesFailed(global_state.profiles_failed));
    }

    Ok(())
}

/// Render, export, and optionally fetch assets for one scraped profile.
async fn present_profile(
    api: &InstagramApi,
    config: &Config,
    username: &str,
    profile: &ScrapedProfile,
) -> Result<DownloadState> {
    let mut state = DownloadState::new(username.to_string());
    state.videos_shown = profile.videos.len() as u64;
    state.images_shown = profile.images.len() as u64;

    print_user_report(&profile.user);

    let sections = [
        (MediaKind::Video, &profile.videos),
        (MediaKind::Image, &profile.images),
    ];

    for (kind, records) in sections {
        // Sort a copy for display and export; the extracted order stays
        // untouched in the memo cache.
        let mut view: Vec<MediaRecord> = records.clone();
        sort_media(&mut view, config.options.sort_by);

        print_media_section(kind, &view, config.options.detail);

        if config.options.export_json {
            let export_dir = config.options.export_directory.join(username);
            let path = write_media_json(&export_dir, kind, &view)?;
            print_success(&format!("Exported {}", path.display()));
            state.mark_export_written();
        }
    }

    if config.options.download_assets {
        fetch_profile_assets(api, config, username, profile, &mut state).await;
    }

    Ok(state)
}

/// Fetch the profile picture and per-item display assets sequentially,
/// reporting each failure on its own without aborting the rest.
async fn fetch_profile_assets(
    api: &InstagramApi,
    config: &Config,
    username: &str,
    profile: &ScrapedProfile,
    state: &mut DownloadState,
) {
    let target_dir = config.options.export_directory.join(username);
    let show_progress = config.options.show_progress;

    // (url, file stem) pairs, in display order
    let mut assets: Vec<(String, String)> = Vec::new();

    if profile.user.profile_pic_url != NOT_AVAILABLE {
        assets.push((
            profile.user.profile_pic_url.clone(),
            format!("{}_profile_pic", username),
        ));
    }

    for (index, video) in profile.videos.iter().enumerate() {
        if video.thumbnail_url != NOT_AVAILABLE {
            assets.push((video.thumbnail_url.clone(), format!("video_{}_thumb", index + 1)));
        }
        if video.video_url != NOT_AVAILABLE {
            assets.push((video.video_url.clone(), format!("video_{}", index + 1)));
        }
    }

    for (index, image) in profile.images.iter().enumerate() {
        if image.thumbnail_url != NOT_AVAILABLE {
            assets.push((image.thumbnail_url.clone(), format!("image_{}", index + 1)));
        }
    }

    for (url, stem) in assets {
        match download_asset(api, &url, &target_dir, &stem, show_progress).await {
            Ok(path) => {
                tracing::info!("Downloaded {}", path.display());
                state.mark_asset_downloaded();
            }
            Err(e) => {
                print_warning(&format!("Failed to fetch asset {}: {}", stem, e));
                state.mark_asset_failed();
            }
        }
    }
}
