//! Reads the favorites settings file and shapes the `/favorites` response.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use favdir_protocol::{FavoriteEntry, FavoritesDocument, FavoritesResponse};

use crate::StoreError;
use crate::defaults::default_favorites;
use crate::paths::settings_file_path;

/// Everything the reader needs, captured once at startup.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// User settings directory the plugin directory lives under.
    pub settings_dir: PathBuf,
    /// Raw `HOME` value.
    pub home: Option<String>,
    /// Raw `SCRATCH` value.
    pub scratch: Option<String>,
    /// Base for relative entry paths without their own `root`.
    pub server_root: Option<PathBuf>,
    /// Write the defaults to disk when the settings file is absent or empty.
    /// Off unless asked for.
    pub seed_defaults: bool,
}

impl ReaderConfig {
    /// Config with no home/scratch and seeding disabled.
    pub fn new(settings_dir: impl Into<PathBuf>) -> Self {
        Self {
            settings_dir: settings_dir.into(),
            home: None,
            scratch: None,
            server_root: None,
            seed_defaults: false,
        }
    }
}

/// Loads persisted favorites and splits them by whether their paths exist.
#[derive(Debug, Clone)]
pub struct FavoritesReader {
    config: ReaderConfig,
}

impl FavoritesReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Location of the settings file.
    pub fn settings_path(&self) -> PathBuf {
        settings_file_path(&self.config.settings_dir)
    }

    /// Current defaults, recomputed on every call.
    pub fn default_favorites(&self) -> Vec<FavoriteEntry> {
        default_favorites(self.config.home.as_deref(), self.config.scratch.as_deref())
    }

    /// Reads and parses the settings file.
    ///
    /// Returns `Ok(None)` when the file is missing, blank, or holds an
    /// empty JSON value (`{}`, `[]`, `null`, `""`, `0`, `false`).
    pub fn load_document(&self) -> Result<Option<FavoritesDocument>, StoreError> {
        let path = self.settings_path();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let value: Value = serde_json::from_str(&content)?;
        if is_empty_value(&value) {
            return Ok(None);
        }

        Ok(Some(serde_json::from_value(value)?))
    }

    /// Writes the current defaults as a fresh settings document.
    pub fn seed_defaults(&self) -> Result<Vec<FavoriteEntry>, StoreError> {
        let defaults = self.default_favorites();
        self.write_document(&FavoritesDocument::new(defaults.clone()))?;
        Ok(defaults)
    }

    /// Builds the `/favorites` response.
    ///
    /// Never fails: a missing file means no persisted entries, and an
    /// unreadable or malformed one is logged and skipped. Persisted entries
    /// identical to a current default are reported only under `default`.
    pub fn read(&self) -> FavoritesResponse {
        let defaults = self.default_favorites();

        let mut persisted = match self.load_document() {
            Ok(Some(doc)) => doc.favorites,
            Ok(None) => {
                if self.config.seed_defaults {
                    let doc = FavoritesDocument::new(defaults.clone());
                    if let Err(e) = self.write_document(&doc) {
                        tracing::warn!(
                            path = %self.settings_path().display(),
                            "failed to seed default favorites: {e}"
                        );
                    }
                }
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.settings_path().display(),
                    "ignoring unreadable favorites settings: {e}"
                );
                Vec::new()
            }
        };

        persisted.retain(|entry| !defaults.contains(entry));
        let (valid, invalid) = partition(persisted, self.config.server_root.as_deref());

        FavoritesResponse {
            defaults,
            valid,
            invalid,
        }
    }

    fn write_document(&self, doc: &FavoritesDocument) -> Result<(), StoreError> {
        let path = self.settings_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // The settings registry writes with four-space indentation.
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        doc.serialize(&mut ser)?;

        std::fs::write(&path, &buf)?;
        tracing::debug!(
            path = %path.display(),
            count = doc.favorites.len(),
            "wrote favorites settings"
        );
        Ok(())
    }
}

/// Splits entries into `(valid, invalid)` by whether `path` exists.
///
/// A relative path is tried against the entry's own `root` key, then
/// `server_root`. With neither, it resolves against the cwd. Order is kept.
pub fn partition(
    entries: Vec<FavoriteEntry>,
    server_root: Option<&Path>,
) -> (Vec<FavoriteEntry>, Vec<FavoriteEntry>) {
    entries
        .into_iter()
        .partition(|entry| path_resolves(entry, server_root))
}

fn path_resolves(entry: &FavoriteEntry, server_root: Option<&Path>) -> bool {
    if entry.path.is_empty() {
        return false;
    }
    let path = Path::new(&entry.path);
    if path.is_absolute() {
        return std::fs::canonicalize(path).is_ok();
    }

    let entry_root = entry
        .extra
        .get("root")
        .and_then(Value::as_str)
        .filter(|root| !root.is_empty())
        .map(Path::new);
    let roots: Vec<&Path> = entry_root.into_iter().chain(server_root).collect();
    if roots.is_empty() {
        return std::fs::canonicalize(path).is_ok();
    }
    roots
        .iter()
        .any(|root| std::fs::canonicalize(root.join(path)).is_ok())
}

/// JSON values the settings registry treats as "nothing stored".
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
