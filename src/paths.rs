//! XDG directory helpers for data locations.

use std::path::PathBuf;

/// Base directory for persistent data (the preferences file).
///
/// Uses `NEIGHBORS_DATA_DIR` if set, otherwise
/// `$XDG_DATA_HOME/neighbors-light` or `~/.local/share/neighbors-light`.
pub(crate) fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("NEIGHBORS_DATA_DIR")
        && !dir.trim().is_empty()
    {
        return PathBuf::from(dir);
    }

    std::env::var("XDG_DATA_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("/tmp"))
                .join(".local")
                .join("share")
        })
        .join("neighbors-light")
}
