//! Dashboard settings loaded from TOML.
//!
//! Settings are read from `--config <PATH>` when given, otherwise from the
//! platform-specific config folder:
//! - macOS: ~/Library/Application Support/com.speed-dashboard.Speed-Dashboard/
//! - Windows: %APPDATA%/speed-dashboard/Speed Dashboard/config/
//! - Linux: ~/.config/speed-dashboard/
//!
//! A missing or unparseable file falls back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use speed_ingest::DEFAULT_DATA_PATH;
use speed_model::{FilterState, ImprovementWindow, Year};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "speed-dashboard";
const APP_NAME: &str = "Speed Dashboard";
const CONFIG_FILENAME: &str = "settings.toml";

/// Rendering format for computed views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data: DataSettings,
    pub views: ViewSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Speed table used when no path is given on the command line.
    pub path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_n: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<Year>,
    pub improvement: ImprovementWindow,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

impl Settings {
    /// Filter state seeded from the configured defaults.
    pub fn base_filters(&self) -> FilterState {
        FilterState {
            year: self.views.year,
            top_n: self.views.top_n,
            improvement: self.views.improvement,
            ..FilterState::default()
        }
    }
}

/// Default settings file location, if the platform has one.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Parses settings from TOML text.
pub fn parse_settings(content: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(content)
}

/// Loads settings from `explicit` or the default location.
///
/// Never fails: unreadable or invalid files are logged and replaced by
/// defaults.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match settings_path() {
            Some(path) => path,
            None => {
                tracing::warn!("Could not determine settings path, using defaults");
                return Settings::default();
            }
        },
    };

    match fs::read_to_string(&path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "Loaded settings");
                settings
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "Failed to parse settings file, using defaults");
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if explicit.is_some() {
                tracing::warn!(path = %path.display(), "Settings file not found, using defaults");
            } else {
                tracing::debug!(path = %path.display(), "No settings file, using defaults");
            }
            Settings::default()
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "Failed to read settings file, using defaults");
            Settings::default()
        }
    }
}
