//! Search box configuration.
//!
//! Settings are read from `config.json` in the platform config directory.
//! Every field has a default, so a missing file or a partial file is fine.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, SearchError};

/// Environment variable that overrides [`SearchConfig::base_url`].
pub const BASE_URL_ENV: &str = "USER_SEARCH_BASE_URL";

/// Name of the config file inside the config directory.
const CONFIG_FILE: &str = "config.json";

/// Runtime settings for the search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Scheme and authority of the server, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,
    /// Path of the user-search endpoint.
    pub endpoint_path: String,
    /// Quiet period before a typed query is sent, in milliseconds.
    pub debounce_ms: u64,
    /// Id of the text input.
    pub input_id: String,
    /// Id of the table body that receives results.
    pub container_id: String,
    /// Class of the search button.
    pub trigger_class: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            endpoint_path: "/usuarios/gestion/obtener-usuarios/".to_string(),
            debounce_ms: 300,
            input_id: "searchUser".to_string(),
            container_id: "tbodyUsuarios".to_string(),
            trigger_class: "btn-search".to_string(),
        }
    }
}

impl SearchConfig {
    /// Loads the config from the platform config directory.
    ///
    /// Falls back to defaults when no file exists, then applies
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let config = match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Loads the config from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| SearchError::Config {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        serde_json::from_str(&raw).map_err(|e| SearchError::Config {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }

    /// Returns the default config file location, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "user-search").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Applies overrides from a variable lookup (normally the process env).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.base_url = base_url;
        }
        self
    }

    /// Returns the debounce window.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Returns the full endpoint URL.
    pub fn endpoint(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?.join(&self.endpoint_path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults_match_user_management_page() {
        let config = SearchConfig::default();
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert_eq!(config.input_id, "searchUser");
        assert_eq!(config.container_id, "tbodyUsuarios");
        assert_eq!(config.trigger_class, "btn-search");
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "http://127.0.0.1:8000/usuarios/gestion/obtener-usuarios/"
        );
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"base_url": "https://intranet.example", "debounce_ms": 150}}"#).unwrap();

        let config = SearchConfig::load_from(file.path()).unwrap();
        assert_eq!(config.base_url, "https://intranet.example");
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.endpoint_path, "/usuarios/gestion/obtener-usuarios/");
    }

    #[test]
    fn malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "debounce_ms = 300").unwrap();

        let err = SearchConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, SearchError::Config { .. }));
    }

    #[test]
    fn env_override_replaces_base_url() {
        let config = SearchConfig::default().with_overrides(|key| {
            (key == BASE_URL_ENV).then(|| "http://10.0.0.5:9000".to_string())
        });
        assert_eq!(config.base_url, "http://10.0.0.5:9000");

        let untouched = SearchConfig::default().with_overrides(|_| Some("  ".to_string()));
        assert_eq!(untouched.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let config = SearchConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.endpoint(), Err(SearchError::InvalidUrl(_))));
    }
}
