//! Scene configuration supplied by the host page.

use crate::camera::CameraMode;
use crate::color::{parse_background, Background};
use crate::constants::*;
use fnv::FnvHashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid number for `{key}`: {value:?}")]
    Number { key: String, value: String },
    #[error("invalid flag for `{key}`: {value:?}")]
    Flag { key: String, value: String },
    #[error("unsupported colour {0:?}")]
    Color(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub shape_count: i32,
    pub spread_radius: f32,
    pub enable_orbit_controls: bool,
    pub background_color: String,
    pub enable_post_processing: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shape_count: DEFAULT_SHAPE_COUNT,
            spread_radius: DEFAULT_SPREAD,
            enable_orbit_controls: true,
            background_color: DEFAULT_BACKGROUND.to_string(),
            enable_post_processing: true,
        }
    }
}

impl SceneConfig {
    /// Shape count with non-positive values mapped to an empty field.
    pub fn effective_shape_count(&self) -> usize {
        self.shape_count.max(0) as usize
    }

    pub fn effective_spread(&self) -> f32 {
        if self.spread_radius.is_finite() && self.spread_radius >= 0.0 {
            self.spread_radius
        } else {
            DEFAULT_SPREAD
        }
    }

    pub fn camera_mode(&self) -> CameraMode {
        CameraMode::from_orbit_flag(self.enable_orbit_controls)
    }

    /// Parsed background, falling back to the default colour.
    pub fn background(&self) -> Background {
        parse_background(&self.background_color).unwrap_or_else(|e| {
            log::warn!("[config] {}; using {}", e, DEFAULT_BACKGROUND);
            parse_background(DEFAULT_BACKGROUND).unwrap_or(Background::TRANSPARENT)
        })
    }

    /// Step the shape count by `delta`, clamped to the slider range.
    pub fn with_shape_count_step(&self, delta: i32) -> Self {
        Self {
            shape_count: (self.shape_count + delta).clamp(SHAPE_COUNT_MIN, SHAPE_COUNT_MAX),
            ..self.clone()
        }
    }

    pub fn with_camera_mode_toggled(&self) -> Self {
        Self {
            enable_orbit_controls: !self.enable_orbit_controls,
            ..self.clone()
        }
    }

    /// Apply one `key = value` pair. Unknown keys are ignored.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let v = value.trim();
        match key {
            "shape-count" | "shapeCount" => {
                self.shape_count = v.parse().map_err(|_| ConfigError::Number {
                    key: key.to_string(),
                    value: value.to_string(),
                })?;
            }
            "spread" | "spreadRadius" => {
                self.spread_radius = v.parse().map_err(|_| ConfigError::Number {
                    key: key.to_string(),
                    value: value.to_string(),
                })?;
            }
            "orbit" | "enableOrbitControls" => self.enable_orbit_controls = parse_flag(key, v)?,
            "post" | "enablePostProcessing" => self.enable_post_processing = parse_flag(key, v)?,
            "background" | "backgroundColor" => {
                parse_background(v)?;
                self.background_color = v.to_string();
            }
            _ => {}
        }
        Ok(())
    }

    /// Build from host attributes, logging and skipping values that fail to
    /// parse.
    pub fn from_attributes(attrs: &FnvHashMap<String, String>) -> Self {
        let mut config = Self::default();
        let mut keys: Vec<&String> = attrs.keys().collect();
        keys.sort();
        for key in keys {
            if let Err(e) = config.apply(key, &attrs[key]) {
                log::warn!("[config] {}", e);
            }
        }
        config
    }
}

fn parse_flag(key: &str, v: &str) -> Result<bool, ConfigError> {
    match v.to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::Flag {
            key: key.to_string(),
            value: v.to_string(),
        }),
    }
}
