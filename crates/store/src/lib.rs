//! Favorites settings file handling.
//!
//! Locates the per-user settings file, seeds it with default favorites on
//! first read, and splits persisted entries into those whose paths still
//! exist and those that no longer resolve.

mod defaults;
mod paths;
mod reader;

pub use defaults::{default_favorites, home_favorite, resolve_dir, scratch_favorite};
pub use paths::{settings_file_path, user_settings_dir};
pub use reader::{FavoritesReader, ReaderConfig, partition};

/// Errors produced while loading or writing the settings file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
