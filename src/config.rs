//! Settings for the slider overlays.
//!
//! Settings are plain serde data. Where they are stored is up to the host;
//! this module only provides the JSON form and its validation.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HEURISTICS_BEGIN_DISTANCE, DEFAULT_HEURISTICS_END_DISTANCE};
use crate::hysteresis::fade_alpha;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show controller lifecycle and focus changes
    Debug,
    /// Show per-frame detail
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// How entry fields are shown next to sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStyle {
    /// Fields fade in as the cursor approaches the slider
    #[default]
    Hover,
    /// Fields are always visible and the slider is shrunk to make room
    AlwaysOn,
}

/// Which controller wins focus when several are equally close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The controller registered first
    #[default]
    FirstMatch,
    /// The controller interacted with most recently, then registration order
    MostRecentInteraction,
}

/// Current settings format version.
/// Increment this when making breaking changes to the format.
pub const SETTINGS_VERSION: u32 = 1;

/// User-facing overlay settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSettings {
    #[serde(default)]
    pub display_style: DisplayStyle,

    /// Distance from a slider at which its fields start fading
    #[serde(default = "default_begin_distance")]
    pub heuristics_begin_distance: f32,

    /// Distance from a slider at which its fields are hidden
    #[serde(default = "default_end_distance")]
    pub heuristics_end_distance: f32,

    #[serde(default)]
    pub tie_break: TieBreak,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_begin_distance() -> f32 {
    DEFAULT_HEURISTICS_BEGIN_DISTANCE
}

fn default_end_distance() -> f32 {
    DEFAULT_HEURISTICS_END_DISTANCE
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            display_style: DisplayStyle::default(),
            heuristics_begin_distance: default_begin_distance(),
            heuristics_end_distance: default_end_distance(),
            tie_break: TieBreak::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl SliderSettings {
    pub fn is_always_on(&self) -> bool {
        self.display_style == DisplayStyle::AlwaysOn
    }

    /// Check the fade thresholds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let begin = self.heuristics_begin_distance;
        let end = self.heuristics_end_distance;
        if !begin.is_finite() || !end.is_finite() || begin < 0.0 || end <= begin {
            return Err(ConfigError::InvalidThresholds { begin, end });
        }
        Ok(())
    }

    /// Alpha the settings preview shows with the cursor `distance` away.
    pub fn fade_preview_alpha(&self, distance: f32) -> f32 {
        fade_alpha(
            distance,
            1.0,
            self.heuristics_begin_distance,
            self.heuristics_end_distance,
        )
    }
}

/// Versioned settings document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsFile {
    /// Version of the settings format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    #[serde(default)]
    pub settings: SliderSettings,
}

fn default_app_name() -> String {
    "Better Sliders".to_string()
}

impl SettingsFile {
    pub fn new(settings: SliderSettings) -> Self {
        Self {
            version: SETTINGS_VERSION,
            app_name: default_app_name(),
            settings,
        }
    }

    /// Serialize the settings to JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: Self = serde_json::from_str(json)?;

        if file.version > SETTINGS_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: file.version,
                supported_version: SETTINGS_VERSION,
            });
        }
        file.settings.validate()?;

        Ok(file)
    }
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self::new(SliderSettings::default())
    }
}

/// Errors that can occur when loading settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Settings version is newer than supported
    #[error("Settings file version {file_version} is newer than supported version {supported_version}")]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// Fade thresholds that cannot describe a fade
    #[error("Invalid fade thresholds: begin {begin}, end {end}")]
    InvalidThresholds { begin: f32, end: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SliderSettings::default();
        assert_eq!(settings.display_style, DisplayStyle::Hover);
        assert_eq!(settings.heuristics_begin_distance, 35.0);
        assert_eq!(settings.heuristics_end_distance, 110.0);
        assert_eq!(settings.tie_break, TieBreak::FirstMatch);
        assert!(!settings.is_always_on());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = SliderSettings::default();
        settings.display_style = DisplayStyle::AlwaysOn;
        settings.tie_break = TieBreak::MostRecentInteraction;
        let json = SettingsFile::new(settings.clone()).to_json().unwrap();
        assert!(json.contains("\"always_on\""));

        let file = SettingsFile::from_json(&json).unwrap();
        assert_eq!(file.settings, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let file = SettingsFile::from_json(r#"{"version": 1, "settings": {}}"#).unwrap();
        assert_eq!(file.settings, SliderSettings::default());
        assert_eq!(file.app_name, "Better Sliders");
    }

    #[test]
    fn test_version_too_new() {
        let err = SettingsFile::from_json(r#"{"version": 99}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 99,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_thresholds() {
        let json = r#"{"version": 1, "settings": {"heuristics_begin_distance": 50, "heuristics_end_distance": 20}}"#;
        assert!(matches!(
            SettingsFile::from_json(json),
            Err(ConfigError::InvalidThresholds { .. })
        ));

        let mut settings = SliderSettings::default();
        settings.heuristics_begin_distance = -1.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            SettingsFile::from_json("not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_fade_preview() {
        let settings = SliderSettings::default();
        assert_eq!(settings.fade_preview_alpha(10.0), 1.0);
        assert_eq!(settings.fade_preview_alpha(110.0), 0.0);
        let mid = settings.fade_preview_alpha(55.0);
        assert!((mid - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }
}
