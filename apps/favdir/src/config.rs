//! Service configuration.
//!
//! Reads JSON at `~/.config/favdir/config.json`, then applies `FAVDIR_*`
//! environment overrides.

use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use favdir_server::ServerConfig;
use favdir_store::ReaderConfig;

const DEFAULT_PORT: u16 = 8889;

/// On-disk config format. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    bind: Option<IpAddr>,
    port: Option<u16>,
    base_url: Option<String>,
    settings_dir: Option<PathBuf>,
    server_root: Option<PathBuf>,
    seed_defaults: Option<bool>,
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: IpAddr,
    pub port: u16,
    pub base_url: String,
    pub settings_dir: PathBuf,
    pub server_root: Option<PathBuf>,
    pub seed_defaults: bool,
    pub home: Option<String>,
    pub scratch: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::defaults_from(&process_env)
    }
}

impl AppConfig {
    /// Loads configuration from disk and the process environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_file_path(&process_env), &process_env)
    }

    /// Loads from an explicit file and env lookup.
    fn load_from<F>(file_path: &Path, env: &F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::defaults_from(env);

        if file_path.exists() {
            let content = std::fs::read_to_string(file_path)?;
            match serde_json::from_str::<ConfigFile>(&content) {
                Ok(file) => config.apply_file(file),
                Err(e) => tracing::warn!(
                    path = %file_path.display(),
                    "failed to parse config, using defaults: {e}"
                ),
            }
        }

        config.apply_env(env);
        Ok(config)
    }

    fn defaults_from<F>(env: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            base_url: "/".into(),
            settings_dir: favdir_store::user_settings_dir(env),
            server_root: None,
            seed_defaults: false,
            home: env("HOME"),
            scratch: env("SCRATCH"),
        }
    }

    fn apply_file(&mut self, file: ConfigFile) {
        if let Some(bind) = file.bind {
            self.bind = bind;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(base_url) = file.base_url.filter(|v| !v.is_empty()) {
            self.base_url = base_url;
        }
        if let Some(dir) = file.settings_dir.filter(|p| !p.as_os_str().is_empty()) {
            self.settings_dir = dir;
        }
        if file.server_root.is_some() {
            self.server_root = file.server_root;
        }
        if let Some(seed) = file.seed_defaults {
            self.seed_defaults = seed;
        }
    }

    fn apply_env<F>(&mut self, env: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|v| !v.is_empty());

        if let Some(raw) = lookup("FAVDIR_BIND") {
            match raw.parse() {
                Ok(bind) => self.bind = bind,
                Err(_) => tracing::warn!("ignoring invalid FAVDIR_BIND: {raw}"),
            }
        }
        if let Some(raw) = lookup("FAVDIR_PORT") {
            match raw.parse() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("ignoring invalid FAVDIR_PORT: {raw}"),
            }
        }
        if let Some(base_url) = lookup("FAVDIR_BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(dir) = lookup("FAVDIR_SETTINGS_DIR") {
            self.settings_dir = PathBuf::from(dir);
        }
        if let Some(root) = lookup("FAVDIR_SERVER_ROOT") {
            self.server_root = Some(PathBuf::from(root));
        }
        if let Some(raw) = lookup("FAVDIR_SEED_DEFAULTS") {
            match parse_bool(&raw) {
                Some(seed) => self.seed_defaults = seed,
                None => tracing::warn!("ignoring invalid FAVDIR_SEED_DEFAULTS: {raw}"),
            }
        }
    }

    pub fn reader_config(&self) -> ReaderConfig {
        ReaderConfig {
            settings_dir: self.settings_dir.clone(),
            home: self.home.clone(),
            scratch: self.scratch.clone(),
            server_root: self.server_root.clone(),
            seed_defaults: self.seed_defaults,
        }
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind: self.bind,
            port: self.port,
            base_url: self.base_url.clone(),
        }
    }
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn config_file_path<F>(env: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let home = env("HOME").unwrap_or_else(|| "/tmp".into());
    PathBuf::from(home)
        .join(".config")
        .join("favdir")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_file() {
        let env = env_of(&[("HOME", "/home/alice"), ("SCRATCH", "/scratch/alice")]);
        let cfg = AppConfig::load_from(Path::new("/definitely/not/config.json"), &env).unwrap();

        assert_eq!(cfg.port, 8889);
        assert_eq!(cfg.base_url, "/");
        assert!(!cfg.seed_defaults);
        assert_eq!(
            cfg.settings_dir,
            PathBuf::from("/home/alice/.jupyter/lab/user-settings")
        );
        assert_eq!(cfg.home.as_deref(), Some("/home/alice"));
        assert_eq!(cfg.scratch.as_deref(), Some("/scratch/alice"));
    }

    #[test]
    fn file_values_applied() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"port":9000,"baseUrl":"/user/alice","settingsDir":"/srv/settings","seedDefaults":false}"#,
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, &env_of(&[])).unwrap();

        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.base_url, "/user/alice");
        assert_eq!(cfg.settings_dir, PathBuf::from("/srv/settings"));
        assert!(!cfg.seed_defaults);
        assert_eq!(cfg.server_config().base_url, "/user/alice");
        assert!(!cfg.reader_config().seed_defaults);
    }

    #[test]
    fn env_overrides_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{"port":9000}"#).unwrap();
        let env = env_of(&[
            ("FAVDIR_PORT", "9100"),
            ("FAVDIR_BIND", "0.0.0.0"),
            ("FAVDIR_SEED_DEFAULTS", "yes"),
            ("FAVDIR_SETTINGS_DIR", "/opt/settings"),
        ]);

        let cfg = AppConfig::load_from(&path, &env).unwrap();

        assert_eq!(cfg.port, 9100);
        assert!(cfg.bind.is_unspecified());
        assert!(cfg.seed_defaults);
        assert_eq!(cfg.settings_dir, PathBuf::from("/opt/settings"));
    }

    #[test]
    fn invalid_env_values_ignored() {
        let env = env_of(&[("FAVDIR_PORT", "lots"), ("FAVDIR_SEED_DEFAULTS", "maybe")]);
        let cfg = AppConfig::load_from(Path::new("/definitely/not/config.json"), &env).unwrap();

        assert_eq!(cfg.port, 8889);
        assert!(!cfg.seed_defaults);
    }

    #[test]
    fn file_can_enable_seeding() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{"seedDefaults":true,"bind":null}"#).unwrap();

        let cfg = AppConfig::load_from(&path, &env_of(&[])).unwrap();
        assert!(cfg.seed_defaults);
        assert!(cfg.reader_config().seed_defaults);
        assert!(cfg.bind.is_loopback());
    }

    #[test]
    fn unparseable_file_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "{ nope").unwrap();

        let cfg = AppConfig::load_from(&path, &env_of(&[])).unwrap();
        assert_eq!(cfg.port, 8889);
    }

    #[test]
    fn config_path_under_home() {
        let env = env_of(&[("HOME", "/home/alice")]);
        assert_eq!(
            config_file_path(&env),
            PathBuf::from("/home/alice/.config/favdir/config.json")
        );
    }
}
