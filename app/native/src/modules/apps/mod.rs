//! Voice application index.
//!
//! Scans the installed skills tree and lists every skill that advertises a
//! launchable application.

mod manifest;

use std::fs;
use std::path::Path;

use serde::Serialize;

pub use manifest::{ANDROID_MANIFEST, APP_MANIFEST, Manifest, ManifestError, read_manifest};

/// A launchable voice application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceApplication {
    /// Absolute path of the icon.
    pub thumbnail: String,
    /// Display name.
    pub name: String,
    /// Event emitted to launch the application.
    pub action: String,
    /// Skill folder name.
    pub folder: String,
}

/// Builds the application list from the skills under `skills_dir`.
///
/// Returns `None` if `skills_dir` is not a directory. Folders with an invalid
/// manifest are skipped with a warning. The result holds at most one entry per
/// folder and is sorted by name.
#[must_use]
pub fn build_application_list(skills_dir: &Path) -> Option<Vec<VoiceApplication>> {
    if !skills_dir.is_dir() {
        tracing::debug!(dir = %skills_dir.display(), "skills directory not found");
        return None;
    }

    let mut folders: Vec<String> = match fs::read_dir(skills_dir) {
        Ok(entries) => entries
            .flatten()
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect(),
        Err(err) => {
            tracing::warn!(error = %err, dir = %skills_dir.display(), "failed to list skills");
            return Some(Vec::new());
        }
    };
    folders.sort();

    let mut apps: Vec<VoiceApplication> = Vec::new();
    for folder in folders {
        if apps.iter().any(|app| app.folder == folder) {
            continue;
        }

        let folder_path = skills_dir.join(&folder);
        if !folder_path.is_dir() {
            continue;
        }

        match read_manifest(&folder_path) {
            Ok(Some(manifest)) => {
                let thumbnail = folder_path.join(manifest.icon.trim_start_matches('/'));
                apps.push(VoiceApplication {
                    thumbnail: thumbnail.display().to_string(),
                    name: manifest.name,
                    action: manifest.action,
                    folder,
                });
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(folder = %folder, error = %err, "skipping skill with invalid manifest");
            }
        }
    }

    apps.sort_by(|a, b| a.name.cmp(&b.name));
    Some(apps)
}
