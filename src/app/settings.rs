use crate::model;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub(super) enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML settings: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("failed to encode TOML settings: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(super) struct AppSettings {
    /// Sport shown when the editor opens; updated whenever it changes.
    pub sport: model::Sport,
    pub show_hints: bool,
    pub show_player_list: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            sport: model::Sport::Football,
            show_hints: true,
            show_player_list: true,
        }
    }
}

fn is_toml(path: &str) -> bool {
    path.ends_with(".toml")
}

/// Parses TOML or JSON, trying the format suggested by the extension first.
pub(super) fn parse_settings(path: &str, text: &str) -> Result<AppSettings, SettingsError> {
    if is_toml(path) {
        match toml::from_str::<AppSettings>(text) {
            Ok(settings) => Ok(settings),
            Err(err) => serde_json::from_str(text).map_err(|_| err.into()),
        }
    } else {
        match serde_json::from_str::<AppSettings>(text) {
            Ok(settings) => Ok(settings),
            Err(err) => toml::from_str(text).map_err(|_| err.into()),
        }
    }
}

pub(super) fn load_settings(path: &str) -> Result<AppSettings, SettingsError> {
    let text = std::fs::read_to_string(path)?;
    parse_settings(path, &text)
}

/// Missing files silently yield defaults; anything else is logged.
pub(super) fn load_or_default(path: &str) -> AppSettings {
    match load_settings(path) {
        Ok(settings) => settings,
        Err(SettingsError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            AppSettings::default()
        }
        Err(err) => {
            tracing::warn!(path, %err, "falling back to default settings");
            AppSettings::default()
        }
    }
}

pub(super) fn save_settings(path: &str, settings: &AppSettings) -> Result<(), SettingsError> {
    let text = if is_toml(path) {
        toml::to_string_pretty(settings)?
    } else {
        serde_json::to_string_pretty(settings)?
    };
    std::fs::write(path, text)?;
    Ok(())
}
