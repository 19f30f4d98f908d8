//! Default favorites derived from the user's environment.

use std::path::PathBuf;

use favdir_protocol::FavoriteEntry;

/// Canonicalizes a directory given as a raw string.
///
/// Returns `None` when the value is missing, empty, or does not exist.
pub fn resolve_dir(raw: Option<&str>) -> Option<PathBuf> {
    let raw = raw.filter(|v| !v.is_empty())?;
    std::fs::canonicalize(raw).ok()
}

/// The `Home` default, if `home` resolves.
pub fn home_favorite(home: Option<&str>) -> Option<FavoriteEntry> {
    resolve_dir(home).map(|p| FavoriteEntry::home(p.to_string_lossy()))
}

/// The `Scratch` default, if `scratch` resolves.
pub fn scratch_favorite(scratch: Option<&str>) -> Option<FavoriteEntry> {
    resolve_dir(scratch).map(|p| FavoriteEntry::scratch(p.to_string_lossy()))
}

/// Home first, then Scratch; unresolvable ones are left out.
pub fn default_favorites(home: Option<&str>, scratch: Option<&str>) -> Vec<FavoriteEntry> {
    [home_favorite(home), scratch_favorite(scratch)]
        .into_iter()
        .flatten()
        .collect()
}
