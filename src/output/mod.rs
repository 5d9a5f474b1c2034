//! Output module for console rendering and export.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - The profile/media terminal report
//! - JSON export of displayed media lists
//! - Statistics reporting

pub mod console;
pub mod export;
pub mod progress;
pub mod report;
pub mod stats;

pub use console::{
    print_banner, print_config_summary, print_error, print_info, print_success, print_warning,
};
pub use export::write_media_json;
pub use progress::{create_download_bar, create_spinner};
pub use report::{print_media_section, print_user_report, sort_media};
pub use stats::{print_global_stats, print_profile_stats};
