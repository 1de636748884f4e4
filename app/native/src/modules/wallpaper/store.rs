//! Wallpaper store: enumeration, selection and rotation.

use std::fs;
use std::path::{Path, PathBuf};

use natord::compare;

use super::WallpaperError;
use crate::config::SkillSettings;

/// Tracks the wallpaper collection and the selected wallpaper.
///
/// The collection is the built-in set followed by the user set, each in
/// natural filename order. A filename present in both sets is listed once,
/// at its built-in position.
#[derive(Debug, Clone)]
pub struct WallpaperStore {
    /// Read-only wallpapers shipped with the package.
    builtin_dir: PathBuf,
    /// Writable wallpapers downloaded at runtime.
    user_dir: PathBuf,
    /// Built-in filenames followed by user filenames.
    collection: Vec<String>,
    /// Selected filename. May be absent from `collection`.
    selected: String,
    /// Directory holding `selected`, if it exists on disk.
    selected_dir: Option<PathBuf>,
}

impl WallpaperStore {
    /// Creates a store with an empty collection. Call [`Self::refresh_collection`]
    /// to populate it.
    #[must_use]
    pub fn new(builtin_dir: PathBuf, user_dir: PathBuf, selected: String) -> Self {
        let mut store = Self {
            builtin_dir,
            user_dir,
            collection: Vec::new(),
            selected,
            selected_dir: None,
        };
        store.selected_dir = store.resolve_path(&store.selected).map(Path::to_path_buf);
        store
    }

    /// Directory of shipped wallpapers.
    #[must_use]
    pub fn builtin_dir(&self) -> &Path { &self.builtin_dir }

    /// Directory of downloaded wallpapers.
    #[must_use]
    pub fn user_dir(&self) -> &Path { &self.user_dir }

    /// The current collection.
    #[must_use]
    pub fn collection(&self) -> &[String] { &self.collection }

    /// The selected wallpaper filename.
    #[must_use]
    pub fn selected(&self) -> &str { &self.selected }

    /// Directory holding the selected wallpaper, if found on disk.
    #[must_use]
    pub fn selected_dir(&self) -> Option<&Path> { self.selected_dir.as_deref() }

    /// Rescans both wallpaper locations and rebuilds the collection.
    ///
    /// An unreadable or missing location contributes no entries.
    pub fn refresh_collection(&mut self) {
        let builtin = list_wallpapers(&self.builtin_dir);
        let user = list_wallpapers(&self.user_dir);

        let mut collection = builtin;
        let builtin_count = collection.len();
        for name in user {
            if !collection[..builtin_count].contains(&name) {
                collection.push(name);
            }
        }

        tracing::debug!(
            builtin = builtin_count,
            total = collection.len(),
            "wallpaper collection refreshed"
        );
        self.collection = collection;
        self.selected_dir = self.resolve_path(&self.selected).map(Path::to_path_buf);
    }

    /// Position of `filename` in the collection.
    #[must_use]
    pub fn current_index(&self, filename: &str) -> Option<usize> {
        self.collection.iter().position(|name| name == filename)
    }

    /// Index that follows the current selection.
    ///
    /// A selection missing from the collection wraps to the first entry.
    fn next_index(&self) -> Result<usize, WallpaperError> {
        if self.collection.is_empty() {
            return Err(WallpaperError::Empty);
        }

        Ok(self
            .current_index(&self.selected)
            .map_or(0, |index| (index + 1) % self.collection.len()))
    }

    /// Selects the next wallpaper and persists the choice.
    ///
    /// # Errors
    ///
    /// Returns [`WallpaperError::Empty`] if the collection is empty; the
    /// selection is left unchanged.
    pub fn advance(&mut self, settings: &mut SkillSettings) -> Result<&str, WallpaperError> {
        let next = self.next_index()?;
        let filename = self.collection[next].clone();
        self.select(filename, settings);
        Ok(&self.selected)
    }

    /// Selects `filename` if it is part of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`WallpaperError::NotFound`] if the filename is not in the collection.
    pub fn select_existing(
        &mut self,
        filename: &str,
        settings: &mut SkillSettings,
    ) -> Result<&str, WallpaperError> {
        let index = self
            .current_index(filename)
            .ok_or_else(|| WallpaperError::NotFound(filename.to_string()))?;
        let filename = self.collection[index].clone();
        self.select(filename, settings);
        Ok(&self.selected)
    }

    /// Writes downloaded bytes as `filename` into the user location, rebuilds
    /// the collection and selects the new file.
    ///
    /// An existing file with the same name is overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written; the selection is left
    /// unchanged.
    pub fn install(
        &mut self,
        filename: &str,
        bytes: &[u8],
        settings: &mut SkillSettings,
    ) -> Result<&str, WallpaperError> {
        fs::create_dir_all(&self.user_dir)?;
        fs::write(self.user_dir.join(filename), bytes)?;
        tracing::info!(filename, bytes = bytes.len(), "wallpaper saved");

        self.refresh_collection();
        self.select_existing(filename, settings)
    }

    /// Directory containing `filename`, preferring the built-in location.
    #[must_use]
    pub fn resolve_path(&self, filename: &str) -> Option<&Path> {
        if filename.is_empty() {
            return None;
        }

        if self.builtin_dir.join(filename).is_file() {
            Some(&self.builtin_dir)
        } else if self.user_dir.join(filename).is_file() {
            Some(&self.user_dir)
        } else {
            None
        }
    }

    fn select(&mut self, filename: String, settings: &mut SkillSettings) {
        self.selected_dir = self.resolve_path(&filename).map(Path::to_path_buf);
        settings.wallpaper = Some(filename.clone());
        if let Err(err) = settings.save() {
            tracing::warn!(error = %err, "failed to persist selected wallpaper");
        }
        tracing::info!(wallpaper = %filename, "wallpaper selected");
        self.selected = filename;
    }
}

/// Lists regular, non-hidden files directly inside `dir`, in natural order.
fn list_wallpapers(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(error = %err, dir = %dir.display(), "failed to list wallpapers");
            }
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| !name.starts_with('.'))
        .collect();

    names.sort_by(|a, b| compare(a, b));
    names
}
