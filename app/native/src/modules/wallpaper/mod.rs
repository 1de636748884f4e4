//! Wallpaper management.
//!
//! Wallpapers come from two locations: a read-only directory shipped with the
//! package and a writable directory filled by downloads. The [`WallpaperStore`]
//! keeps the combined collection, the selection and its persistence.

mod download;
mod store;

pub use download::{DownloadError, WallpaperDownloader, download_filename};
pub use store::WallpaperStore;

/// Errors that can occur in wallpaper management.
#[derive(Debug, thiserror::Error)]
pub enum WallpaperError {
    /// The collection is empty.
    #[error("No wallpapers available")]
    Empty,
    /// The wallpaper is not part of the collection.
    #[error("Wallpaper not found: {0}")]
    NotFound(String),
    /// Writing the wallpaper failed.
    #[error("Failed to write wallpaper: {0}")]
    Io(#[from] std::io::Error),
    /// Downloading the wallpaper failed.
    #[error(transparent)]
    Download(#[from] DownloadError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(WallpaperError::Empty.to_string(), "No wallpapers available");
        assert_eq!(
            WallpaperError::NotFound("x.jpg".to_string()).to_string(),
            "Wallpaper not found: x.jpg"
        );
        assert_eq!(
            WallpaperError::Download(DownloadError::EmptyUrl).to_string(),
            "No wallpaper URL given"
        );
    }
}
