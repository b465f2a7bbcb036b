//! Runtime settings and preferences
//!
//! Gameplay constants live in `consts` and are not configurable; these only
//! affect presentation and frame pacing.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Triangle fan segments per circle
    pub fn circle_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 12,
            QualityPreset::Medium => 24,
            QualityPreset::High => 48,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Frames per second the loop paces itself to
    pub target_fps: u32,
    /// Longest frame delta handed to the simulation, in seconds
    pub max_frame_dt: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            target_fps: 60,
            max_frame_dt: 0.25,
        }
    }
}

impl Settings {
    /// Env var naming a JSON settings file
    pub const PATH_ENV: &'static str = "PULSE_GRID_SETTINGS";

    /// Highest frame rate accepted from a settings file
    pub const MAX_TARGET_FPS: u32 = 1000;

    /// Target frame length in seconds
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    /// Load from the file named by `PULSE_GRID_SETTINGS`, falling back to
    /// defaults if it's unset or unusable.
    pub fn load() -> Self {
        match std::env::var_os(Self::PATH_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load from a JSON file; missing fields take their defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };
        Self::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Bad settings in {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Parse JSON settings. Out-of-range values are replaced by their
    /// defaults; only malformed JSON is an error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings = serde_json::from_str::<Self>(json)?.validated();
        log::info!(
            "Loaded settings: {} quality, {} fps",
            settings.quality.as_str(),
            settings.target_fps
        );
        Ok(settings)
    }

    /// Swap any unusable value for its default
    fn validated(mut self) -> Self {
        let defaults = Self::default();

        if !self.max_frame_dt.is_finite() || self.max_frame_dt <= 0.0 {
            log::warn!(
                "max_frame_dt {} must be positive, using {}",
                self.max_frame_dt,
                defaults.max_frame_dt
            );
            self.max_frame_dt = defaults.max_frame_dt;
        }

        if self.target_fps == 0 || self.target_fps > Self::MAX_TARGET_FPS {
            log::warn!(
                "target_fps {} outside 1..={}, using {}",
                self.target_fps,
                Self::MAX_TARGET_FPS,
                defaults.target_fps
            );
            self.target_fps = defaults.target_fps;
        }

        self
    }
}
