//! Simulation configuration
//!
//! Mirrors the tuning surface the presentation layer and the sim share:
//! canvas size, ball parameters, and ring parameters. Loaded from JSON when
//! a file is provided, otherwise defaults apply.

use serde::{Deserialize, Serialize};

/// Initial speed range the cruise speed is sampled from (units/second)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

/// Ball tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallConfig {
    pub radius: f32,
    pub color: String,
    pub restitution: f32,
    pub friction: f32,
    pub initial_speed: SpeedRange,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 15.0,
            color: "#ffffff".into(),
            restitution: 0.9,
            friction: 0.0,
            // 5-10 units per frame at 60 Hz, expressed per second
            initial_speed: SpeedRange {
                min: 300.0,
                max: 600.0,
            },
        }
    }
}

/// Ring tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingConfig {
    pub inner_radius: f32,
    /// Visual stroke thickness; the physics bodies are much deeper radially
    pub thickness: f32,
    pub color: String,
    pub segments: u32,
    /// Gap size in degrees, converted to radians at ring construction
    pub gap_size_degrees: f32,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            inner_radius: 100.0,
            thickness: 8.0,
            color: "#4444ff".into(),
            segments: 48,
            gap_size_degrees: 45.0,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub background: String,
    pub ball: BallConfig,
    pub ring: RingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1080.0,
            height: 1920.0,
            background: "#0a0a0a".into(),
            ball: BallConfig::default(),
            ring: RingConfig::default(),
        }
    }
}

impl Config {
    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {path}");
                    config
                }
                Err(e) => {
                    log::warn!("Bad config in {path}: {e}; using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {path}: {e}; using defaults");
                Self::default()
            }
        }
    }

    /// Canvas center point
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Parse a `#rrggbb` hex color into 0xRRGGBB
pub fn parse_hex_color(s: &str) -> Option<u32> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

/// Parse a hex color, warning and falling back to white on bad input
pub fn color_or_white(s: &str) -> u32 {
    parse_hex_color(s).unwrap_or_else(|| {
        log::warn!("Unparseable color {s:?}; using white");
        0xffffff
    })
}
