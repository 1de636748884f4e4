//! Shell-like expansion for configured paths.
//!
//! Configuration values may use `~` for the home directory. Relative paths
//! are resolved against a base directory chosen by the caller.

use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
///
/// Empty or whitespace-only input yields an empty path.
#[must_use]
pub fn expand(path: &str) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return PathBuf::new();
    }

    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Expands `path` and resolves it against `base_dir` when still relative.
#[must_use]
pub fn expand_and_resolve(path: &str, base_dir: &Path) -> PathBuf {
    let expanded = expand(path);

    if expanded.as_os_str().is_empty() || expanded.is_absolute() {
        return expanded;
    }

    base_dir.join(expanded)
}

/// Like [`expand_and_resolve`], but falls back to `default` for empty input.
#[must_use]
pub fn expand_or(path: &str, base_dir: &Path, default: PathBuf) -> PathBuf {
    let resolved = expand_and_resolve(path, base_dir);
    if resolved.as_os_str().is_empty() { default } else { resolved }
}
