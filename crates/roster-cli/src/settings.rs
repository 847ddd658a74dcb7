//! Persisted settings.
//!
//! Stored as TOML in the platform config directory (`settings.toml`) unless
//! `--config` points elsewhere. A missing file means defaults; a file that
//! cannot be read or parsed also falls back to defaults, with a warning.

use std::path::{Path, PathBuf};

use roster_core::ViewConfig;
use roster_fetch::RecordSource;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

// =============================================================================
// ERRORS
// =============================================================================

/// Errors reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Roster settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where records are loaded from.
    pub source: SourceSettings,

    /// Initial table view.
    pub view: ViewConfig,
}

impl Settings {
    /// Load settings from `path`, falling back to defaults with a warning.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(error) => {
                warn!(%error, "Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file at {}", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save settings to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Settings rendered as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "Roster", "roster")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// SOURCE SETTINGS
// =============================================================================

/// Record source settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// HTTP endpoint answering `GET` with a JSON array of records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Local JSON file, used when no endpoint is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            file: None,
            timeout_secs: roster_fetch::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl SourceSettings {
    /// Resolve the record source. Command-line values win over the file.
    pub fn resolve(&self, endpoint: Option<&str>, file: Option<&Path>) -> Option<RecordSource> {
        match (endpoint, file) {
            (Some(endpoint), _) => Some(RecordSource::http(endpoint)),
            (None, Some(file)) => Some(RecordSource::file(file)),
            (None, None) => self
                .endpoint
                .as_deref()
                .map(RecordSource::http)
                .or_else(|| self.file.as_deref().map(RecordSource::file)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("roster-settings-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_missing_file_is_default() {
        let settings = Settings::load_from(&temp_path("missing.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.source.timeout_secs, 30);
        assert_eq!(settings.view.row_limit, 10);
    }

    #[test]
    fn test_partial_file() {
        let path = temp_path("partial.toml");
        std::fs::write(
            &path,
            "[source]\nendpoint = \"http://localhost/users\"\n\n[view]\nrow_limit = 25\n",
        )
        .unwrap();
        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.source.endpoint.as_deref(), Some("http://localhost/users"));
        assert_eq!(settings.source.timeout_secs, 30);
        assert_eq!(settings.view.row_limit, 25);
        assert_eq!(settings.view.compact_breakpoint, 786);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let path = temp_path("broken.toml");
        std::fs::write(&path, "[view\nrow_limit = ").unwrap();

        assert!(matches!(
            Settings::load_from(&path),
            Err(SettingsError::Parse { .. })
        ));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_and_reload() {
        let path = temp_path("saved/settings.toml");
        let mut settings = Settings::default();
        settings.source.file = Some(PathBuf::from("users.json"));
        settings.view.row_limit = 5;

        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_resolve_source_precedence() {
        let source = SourceSettings {
            endpoint: Some("http://configured/users".to_string()),
            file: Some(PathBuf::from("configured.json")),
            timeout_secs: 30,
        };

        assert_eq!(
            source.resolve(Some("http://flag/users"), None),
            Some(RecordSource::http("http://flag/users"))
        );
        assert_eq!(
            source.resolve(None, Some(Path::new("flag.json"))),
            Some(RecordSource::file("flag.json"))
        );
        assert_eq!(
            source.resolve(None, None),
            Some(RecordSource::http("http://configured/users"))
        );
        assert_eq!(SourceSettings::default().resolve(None, None), None);
    }
}
