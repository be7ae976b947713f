use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub tracker: TrackerConfig,

    #[serde(default)]
    pub vulkan: VkConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowMode {
    #[default]
    Windowed,
    Borderless,
    Fullscreen,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Negative means "let the platform pick".
    #[serde(default = "default_position")]
    pub x: i32,

    #[serde(default = "default_position")]
    pub y: i32,

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default)]
    pub mode: WindowMode,
}

/// Selects which historical tracker behaviours are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Keep position/size in the state record, updated from move/resize payloads.
    #[serde(default = "default_true")]
    pub track_geometry: bool,

    /// Treat a user-defined notification for the window as "window created".
    #[serde(default = "default_true")]
    pub user_event_creates: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VkConfig {
    /// Packed Vulkan API version. Zero selects 1.0.
    #[serde(default)]
    pub api_version: u32,

    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub layers: Vec<String>,
}

fn default_title() -> String {
    "cinder".to_string()
}
fn default_position() -> i32 {
    -1
}
fn default_width() -> u32 {
    1280
}
fn default_height() -> u32 {
    720
}
fn default_true() -> bool {
    true
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            x: default_position(),
            y: default_position(),
            width: default_width(),
            height: default_height(),
            mode: WindowMode::default(),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            track_geometry: true,
            user_event_creates: true,
        }
    }
}

impl WindowConfig {
    /// Explicit position, or `None` when either coordinate is left to the platform.
    #[inline]
    pub fn position(&self) -> Option<(i32, i32)> {
        if self.x < 0 || self.y < 0 {
            None
        } else {
            Some((self.x, self.y))
        }
    }
}

impl PlatformConfig {
    pub fn load_or_default(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(s) => {
                let cfg = Self::from_toml(&s)
                    .map_err(|e| CoreError::Config(format!("parse {}: {}", path.display(), e)))?;
                log::debug!("config loaded from {}", path.display());
                Ok(cfg)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("config {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(CoreError::Config(format!("read {}: {}", path.display(), e))),
        }
    }

    pub fn from_toml(s: &str) -> CoreResult<Self> {
        let mut cfg: PlatformConfig = toml::from_str(s).map_err(|e| CoreError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Rejects unusable window sizes and fills in an empty title.
    pub fn validate(&mut self) -> CoreResult<()> {
        if self.window.title.is_empty() {
            self.window.title = default_title();
        }

        if self.window.width == 0 || self.window.height == 0 {
            return Err(CoreError::Config(format!(
                "invalid window size: {}x{}",
                self.window.width, self.window.height
            )));
        }

        Ok(())
    }
}
