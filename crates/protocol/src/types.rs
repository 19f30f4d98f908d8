use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{HOME_ICON_CLASS, HOME_TITLE, SCRATCH_ICON_CLASS, SCRATCH_TITLE};

/// A named shortcut to a filesystem path.
///
/// Keys other than `title`, `iconClass` and `path` (the frontend stores
/// `root`, `contentType`, `hidden`, ...) are kept in `extra` and written
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_class: Option<String>,
    pub path: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FavoriteEntry {
    /// Creates an entry with no extra metadata.
    pub fn new(
        title: impl Into<String>,
        icon_class: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            icon_class: Some(icon_class.into()),
            path: path.into(),
            extra: Map::new(),
        }
    }

    /// The default entry pointing at the user's home directory.
    pub fn home(path: impl Into<String>) -> Self {
        Self::new(HOME_TITLE, HOME_ICON_CLASS, path)
    }

    /// The default entry pointing at the user's scratch directory.
    pub fn scratch(path: impl Into<String>) -> Self {
        Self::new(SCRATCH_TITLE, SCRATCH_ICON_CLASS, path)
    }
}

/// On-disk settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoritesDocument {
    #[serde(default)]
    pub favorites: Vec<FavoriteEntry>,
    /// Other top-level settings (e.g. `showWidget`).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FavoritesDocument {
    pub fn new(favorites: Vec<FavoriteEntry>) -> Self {
        Self {
            favorites,
            extra: Map::new(),
        }
    }
}

/// Body returned by `GET /favorites`.
///
/// `default` is always present; `valid` and `invalid` are omitted when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoritesResponse {
    #[serde(rename = "default")]
    pub defaults: Vec<FavoriteEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub valid: Vec<FavoriteEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invalid: Vec<FavoriteEntry>,
}

impl FavoritesResponse {
    /// A response carrying only default favorites.
    pub fn with_defaults(defaults: Vec<FavoriteEntry>) -> Self {
        Self {
            defaults,
            ..Default::default()
        }
    }
}
