//! Fixed names shared by the store and the server.

/// Directory under the user settings dir owned by the favorites extension.
pub const PLUGIN_SETTINGS_DIR: &str = "jupyterlab-favorites";

/// Settings file name inside [`PLUGIN_SETTINGS_DIR`].
pub const SETTINGS_FILE_NAME: &str = "favorites.jupyterlab-settings";

/// Route suffix mounted beneath the configured base URL.
pub const FAVORITES_ROUTE: &str = "/favorites";

pub const HOME_TITLE: &str = "Home";
pub const HOME_ICON_CLASS: &str = "jp-HomeIcon";

pub const SCRATCH_TITLE: &str = "Scratch";
pub const SCRATCH_ICON_CLASS: &str = "jp-FolderIcon";
