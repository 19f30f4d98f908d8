//! Settings directory and settings file locations.

use std::path::{Path, PathBuf};

use favdir_protocol::constants::{PLUGIN_SETTINGS_DIR, SETTINGS_FILE_NAME};

/// Returns `<settings_dir>/jupyterlab-favorites/favorites.jupyterlab-settings`.
pub fn settings_file_path(settings_dir: &Path) -> PathBuf {
    settings_dir
        .join(PLUGIN_SETTINGS_DIR)
        .join(SETTINGS_FILE_NAME)
}

/// Resolves the JupyterLab user settings directory from an env lookup.
///
/// Priority: `JUPYTERLAB_SETTINGS_DIR` > `<JUPYTER_CONFIG_DIR>/lab/user-settings`
/// > `$HOME/.jupyter/lab/user-settings` > `/tmp/.jupyter/lab/user-settings`.
/// Empty values count as unset.
pub fn user_settings_dir<F>(env: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(dir) = lookup("JUPYTERLAB_SETTINGS_DIR") {
        return PathBuf::from(dir);
    }

    let config_dir = match lookup("JUPYTER_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => lookup("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".jupyter"),
    };

    config_dir.join("lab").join("user-settings")
}
