//! Engine configuration resource.
//!
//! Manages engine settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! title = emberengine
//! target_fps = 60
//!
//! [boot]
//! loading_seconds = 2.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TITLE: &str = "emberengine";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_LOADING_SECONDS: f32 = 2.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Engine configuration resource.
///
/// Stores window settings and boot behavior. Values come from the defaults
/// above unless [`EngineConfig::load_from_file`] is called before the
/// engine opens the device.
#[derive(Resource, Debug, Clone)]
pub struct EngineConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Window title.
    pub title: String,
    /// Target frames per second.
    pub target_fps: u32,
    /// Minimum seconds the loading frame is shown before the first stage
    /// initializes.
    pub loading_seconds: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            loading_seconds: DEFAULT_LOADING_SECONDS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [boot] section
        if let Some(secs) = config.getfloat("boot", "loading_seconds").ok().flatten() {
            self.loading_seconds = secs as f32;
        }

        info!(
            "Loaded config: {}x{} window, title={:?}, fps={}, loading_seconds={}",
            self.window_width, self.window_height, self.title, self.target_fps, self.loading_seconds
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "title", Some(self.title.clone()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set(
            "boot",
            "loading_seconds",
            Some(self.loading_seconds.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = EngineConfig::new();
        assert!(config.window_width > 0);
        assert!(config.window_height > 0);
        assert!(config.target_fps > 0);
        assert!(config.loading_seconds >= 0.0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = EngineConfig::with_path("/nonexistent/config.ini");
        assert!(config.load_from_file().is_err());
        // defaults survive a failed load
        assert_eq!(config.window_width, DEFAULT_WINDOW_WIDTH);
    }
}
