//! Display-asset downloading.
//!
//! Assets (profile picture, thumbnails, video files) are fetched one at a
//! time through the same pre-configured client as the profile request.
//! Each asset fails independently; a broken URL never aborts the rest of
//! the run.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use reqwest::header::CONTENT_TYPE;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::api::InstagramApi;
use crate::error::{Error, Result};
use crate::output::create_download_bar;

/// Minimum content length to show a progress bar (5 MB).
const PROGRESS_THRESHOLD: u64 = 5 * 1024 * 1024;

/// Download one asset into `target_dir` as `{stem}.{ext}`, streaming the
/// body to disk. The extension comes from the URL path, falling back to the
/// response `Content-Type`. Returns the written path.
pub async fn download_asset(
    api: &InstagramApi,
    url: &str,
    target_dir: &Path,
    stem: &str,
    show_progress: bool,
) -> Result<PathBuf> {
    let response = api.fetch_asset(url).await?;

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let extension =
        extension_from_url(url).unwrap_or_else(|| mime_to_extension(&content_type));

    tokio::fs::create_dir_all(target_dir).await?;
    let output_path = target_dir.join(format!("{}.{}", stem, extension));

    let content_length = response.content_length();
    let progress = if show_progress
        && content_length.map(|l| l > PROGRESS_THRESHOLD).unwrap_or(false)
    {
        Some(create_download_bar(content_length.unwrap_or(0), stem))
    } else {
        None
    };

    // Stream to file
    let mut file = File::create(&output_path).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Asset(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(output_path)
}

/// Extract a file extension from the URL path.
fn extension_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let filename = parsed.path_segments()?.last()?;
    let (_, ext) = filename.rsplit_once('.')?;

    // Validate it looks like an extension (1-10 chars, alphanumeric)
    if !ext.is_empty() && ext.len() <= 10 && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some(ext.to_lowercase())
    } else {
        None
    }
}

/// Convert a MIME type to a file extension.
fn mime_to_extension(mimetype: &str) -> String {
    match mimetype.split(';').next().unwrap_or("").trim() {
        // Images
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",

        // Videos
        "video/mp4" => "mp4",
        "video/webm" => "webm",
        "video/quicktime" => "mov",

        // Default
        _ => "bin",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_from_url() {
        assert_eq!(
            extension_from_url("https://cdn.example.com/file.jpg"),
            Some("jpg".to_string())
        );
        assert_eq!(
            extension_from_url("https://cdn.example.com/file.jpg?token=abc&se=5"),
            Some("jpg".to_string())
        );
        assert_eq!(
            extension_from_url("https://cdn.example.com/path/to/file.PNG"),
            Some("png".to_string())
        );
        assert_eq!(extension_from_url("https://cdn.example.com/no-extension"), None);
        assert_eq!(extension_from_url("not a url"), None);
    }

    #[test]
    fn test_mime_to_extension() {
        assert_eq!(mime_to_extension("image/jpeg"), "jpg");
        assert_eq!(mime_to_extension("image/jpeg; charset=binary"), "jpg");
        assert_eq!(mime_to_extension("video/mp4"), "mp4");
        assert_eq!(mime_to_extension("unknown/type"), "bin");
        assert_eq!(mime_to_extension(""), "bin");
    }
}
