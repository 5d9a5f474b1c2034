//! Statistics reporting.

use console::style;

use crate::download::{DownloadState, GlobalState};

/// Print statistics for a single profile.
pub fn print_profile_stats(state: &DownloadState) {
    println!();
    println!(
        "{}",
        style(format!("Statistics for {}:", state.username)).bold()
    );
    println!("  Videos shown:  {}", state.videos_shown);
    println!("  Images shown:  {}", state.images_shown);
    println!("  Exports:       {}", state.exports_written);
    if state.assets_downloaded > 0 || state.assets_failed > 0 {
        println!("  Assets:        {} downloaded", state.assets_downloaded);
        if state.assets_failed > 0 {
            println!(
                "  Asset errors:  {}",
                style(state.assets_failed).red()
            );
        }
    }
}

/// Print global statistics across all profiles.
pub fn print_global_stats(state: &GlobalState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Global Statistics:").bold());
    println!("  Profiles processed: {}", state.profiles_processed);
    if state.profiles_failed > 0 {
        println!(
            "  Profiles failed:    {}",
            style(state.profiles_failed).red()
        );
    }
    println!("  Exports written:    {}", state.exports_written);
    println!("  Assets downloaded:  {}", state.assets_downloaded);
    if state.assets_failed > 0 {
        println!(
            "  Asset errors:       {}",
            style(state.assets_failed).red()
        );
    }
    println!("{}", style("═".repeat(50)).dim());
}
