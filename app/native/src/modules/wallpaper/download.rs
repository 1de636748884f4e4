//! Remote wallpaper downloads.
//!
//! Downloaded files are named after the wall-clock time (`wallpaper-HHMMSS.jpg`).
//! Two downloads within the same second share a name and the second one
//! overwrites the first.

use std::time::Duration;

use chrono::Timelike;

use super::{WallpaperError, WallpaperStore};
use crate::config::SkillSettings;

/// Errors raised while fetching a remote wallpaper.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// No URL was supplied.
    #[error("No wallpaper URL given")]
    EmptyUrl,
    /// The request failed or returned a non-success status.
    #[error("Failed to download wallpaper: {0}")]
    Http(#[from] reqwest::Error),
}

/// HTTP client used for wallpaper downloads.
#[derive(Debug, Clone)]
pub struct WallpaperDownloader {
    client: reqwest::Client,
}

impl WallpaperDownloader {
    /// Creates a downloader whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, DownloadError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Fetches `url` and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is empty, the request fails or the server
    /// answers with a non-success status.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        if url.trim().is_empty() {
            return Err(DownloadError::EmptyUrl);
        }

        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Filename for a wallpaper downloaded at `time`.
#[must_use]
pub fn download_filename<T: Timelike>(time: &T) -> String {
    format!(
        "wallpaper-{:02}{:02}{:02}.jpg",
        time.hour(),
        time.minute(),
        time.second()
    )
}

impl WallpaperStore {
    /// Downloads `url` into the user location and selects it.
    ///
    /// # Errors
    ///
    /// Returns an error if the download or the write fails; the previous
    /// selection is left unchanged.
    pub async fn set_from_downloaded_url(
        &mut self,
        url: &str,
        downloader: &WallpaperDownloader,
        settings: &mut SkillSettings,
    ) -> Result<&str, WallpaperError> {
        let filename = download_filename(&chrono::Local::now());
        tracing::info!(url, filename = %filename, "downloading wallpaper");

        let bytes = downloader.fetch(url).await?;
        self.install(&filename, &bytes, settings)
    }
}
