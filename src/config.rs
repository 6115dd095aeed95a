use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::consts::SESSIONS_FILE;

/// Environment override for the session log path
pub(crate) const FILE_ENV: &str = "STUDYTIME_FILE";

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigSortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigSortKey {
    Subject,
    Total,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) plain: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) sort: Option<ConfigSortKey>,
    #[serde(default)]
    pub(crate) order: Option<ConfigSortOrder>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    /// File this config was read from
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
}

impl Config {
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(mut config) => {
                        config.source = Some(path);
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/studytime/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("studytime").join("config.toml"));
        }

        // 2. Platform config dir (e.g. ~/Library/Application Support/studytime/config.toml)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("studytime").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.studytime.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".studytime.toml"));
        }

        paths
    }

    /// Session log path when neither `--file` nor the config sets one
    pub(crate) fn default_sessions_path() -> PathBuf {
        match dirs::data_dir() {
            Some(dir) => dir.join("studytime").join(SESSIONS_FILE),
            None => PathBuf::from(SESSIONS_FILE),
        }
    }
}
