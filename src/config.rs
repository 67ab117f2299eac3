// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! Lesson configuration.
//!
//! Every key is optional in the toml file, missing keys take the defaults
//! below. Command line flags are applied on top by main.
//!
//! ```toml
//! title = "SDL Tutorial"
//! width = 640
//! height = 480
//! vsync = true
//! asset_root = "assets"
//! log_level = "info"
//! log_file = "log/pixel_lessons.log"
//! ticks_per_second = 10000
//! tick_increment = 1
//! load_policy = "all-or-nothing"
//! # frame_limit = 120
//! ```

use crate::{asset::LoadPolicy, error::ConfigError, SCREEN_HEIGHT, SCREEN_WIDTH};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub asset_root: String,
    pub log_level: String,
    pub log_file: String,
    pub ticks_per_second: u32,
    pub tick_increment: u32,
    pub load_policy: LoadPolicy,
    /// Stop after this many frames, None runs until quit
    pub frame_limit: Option<u64>,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            title: "SDL Tutorial".to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            vsync: true,
            asset_root: "assets".to_string(),
            log_level: "info".to_string(),
            log_file: "log/pixel_lessons.log".to_string(),
            ticks_per_second: 10000,
            tick_increment: 1,
            load_policy: LoadPolicy::AllOrNothing,
            frame_limit: None,
        }
    }
}

impl LessonConfig {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let cfg = Self::from_toml(&text)?;
        info!("config load:{}", path);
        Ok(cfg)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Path of an asset below asset_root
    pub fn asset(&self, loc: &str) -> String {
        crate::util::asset_path(&self.asset_root, loc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = LessonConfig::from_toml("").unwrap();
        assert_eq!(cfg, LessonConfig::default());
        assert_eq!((cfg.width, cfg.height), (640, 480));
        assert_eq!(cfg.ticks_per_second, 10000);
    }

    #[test]
    fn partial_file_overrides_some_keys() {
        let cfg = LessonConfig::from_toml(
            "title = \"Rotation\"\nload_policy = \"any-succeeds\"\nframe_limit = 3\n",
        )
        .unwrap();
        assert_eq!(cfg.title, "Rotation");
        assert_eq!(cfg.load_policy, LoadPolicy::AnySucceeds);
        assert_eq!(cfg.frame_limit, Some(3));
        assert!(cfg.vsync);
    }

    #[test]
    fn bad_files_are_reported() {
        assert!(matches!(
            LessonConfig::from_toml("width = \"wide\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            LessonConfig::load("no/such/lessons.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
