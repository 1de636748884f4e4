//! Skill manifest files.
//!
//! A skill advertises a launchable voice application through `app.json` or,
//! failing that, `android.json`. Both carry the same three values under
//! different keys.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Generic manifest filename, preferred when present.
pub const APP_MANIFEST: &str = "app.json";

/// Mobile manifest filename.
pub const ANDROID_MANIFEST: &str = "android.json";

/// Errors raised while reading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid manifest {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Values extracted from either manifest flavour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub icon: String,
    pub name: String,
    pub action: String,
}

#[derive(Deserialize)]
struct AppManifest {
    icon: String,
    name: String,
    action: String,
}

#[derive(Deserialize)]
struct AndroidManifest {
    android_icon: String,
    android_name: String,
    android_handler: String,
}

impl From<AppManifest> for Manifest {
    fn from(m: AppManifest) -> Self { Self { icon: m.icon, name: m.name, action: m.action } }
}

impl From<AndroidManifest> for Manifest {
    fn from(m: AndroidManifest) -> Self {
        Self {
            icon: m.android_icon,
            name: m.android_name,
            action: m.android_handler,
        }
    }
}

/// Reads the manifest of the skill in `folder`.
///
/// Returns `Ok(None)` when the folder carries neither manifest. When
/// `app.json` exists it is the only file consulted, even if it is invalid.
///
/// # Errors
///
/// Returns an error if the chosen manifest cannot be read or lacks a key.
pub fn read_manifest(folder: &Path) -> Result<Option<Manifest>, ManifestError> {
    let app = folder.join(APP_MANIFEST);
    if app.is_file() {
        return parse::<AppManifest>(&app).map(|m| Some(m.into()));
    }

    let android = folder.join(ANDROID_MANIFEST);
    if android.is_file() {
        return parse::<AndroidManifest>(&android).map(|m| Some(m.into()));
    }

    Ok(None)
}

fn parse<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, ManifestError> {
    let contents = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ManifestError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}
