//! Game settings
//!
//! Loaded from an optional JSON file; anything missing falls back to the
//! defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::colors;

/// Settings loading errors
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    /// File could not be read
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid settings JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_width: u32,
    pub window_height: u32,
    pub title: String,
    /// Wait for vertical sync on present
    pub vsync: bool,

    // === Motion (per frame) ===
    /// Paddle displacement per frame while an arrow key is held
    pub paddle_speed: f32,
    /// Ball displacement per frame on each axis
    pub ball_velocity: [f32; 2],

    // === Colors ===
    pub clear_color: [f32; 4],
    pub paddle_color: [f32; 4],
    pub ball_color: [f32; 4],
    pub brick_color: [f32; 4],

    // === Headless ===
    /// Frames the native demo session runs before it asks to close
    pub demo_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            title: "Brick".to_string(),
            vsync: true,

            paddle_speed: PADDLE_SPEED,
            ball_velocity: BALL_VELOCITY.to_array(),

            clear_color: colors::BACKGROUND,
            paddle_color: colors::PADDLE,
            ball_color: colors::BALL,
            brick_color: colors::BRICK,

            demo_frames: 600,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const PATH_ENV: &'static str = "BRICK_BREAKER_SETTINGS";

    /// Settings file looked up in the working directory
    const DEFAULT_FILE: &'static str = "settings.json";

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Path to load from: the environment override, else `settings.json` if present
    fn source_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(Self::PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(Self::DEFAULT_FILE);
        local.is_file().then_some(local)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load() -> Self {
        let Some(path) = Self::source_path() else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from_path(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let s = Settings::default();
        assert_eq!(s.window_width, 800);
        assert_eq!(s.paddle_speed, 0.015);
        assert_eq!(s.ball_velocity, [0.01, 0.01]);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{ "paddle_speed": 0.03, "title": "Bricks" }"#).expect("valid json");
        assert_eq!(s.paddle_speed, 0.03);
        assert_eq!(s.title, "Bricks");
        assert_eq!(s.ball_velocity, Settings::default().ball_velocity);
        assert!(s.vsync);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut s = Settings::default();
        s.demo_frames = 42;
        let json = s.to_json().expect("serializable");
        assert_eq!(Settings::from_json(&json).expect("valid json"), s);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Settings::from_json("{ paddle_speed: }").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from_path("/nonexistent/brick-breaker/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/brick-breaker/settings.json"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("brick-breaker-settings-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "demo_frames": 12 }"#).expect("writable temp dir");

        let s = Settings::load_from_path(&path).expect("readable settings");
        assert_eq!(s.demo_frames, 12);

        let _ = std::fs::remove_file(&path);
    }
}
