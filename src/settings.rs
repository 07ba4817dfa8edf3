//! Game settings and difficulty tiers
//!
//! Settings are optional: the binary reads a JSON file when one is named,
//! otherwise the reference board is used.

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{JosephusError, Result};

/// Difficulty tier; picks the range the soldier count is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Inclusive soldier count range for this tier
    pub fn count_range(&self) -> RangeInclusive<usize> {
        match self {
            Difficulty::Easy => 2..=10,
            Difficulty::Normal => 11..=25,
            Difficulty::Hard => 50..=100,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Board and pacing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Radius of the soldier circle (pixels)
    pub radius: f64,
    /// Side of the square canvas; the circle sits at its center
    pub canvas_size: i32,
    /// Diameter of one soldier disk
    pub disk_size: i32,
    /// Pause between drawn kill arrows
    pub animation_step_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            radius: CIRCLE_RADIUS,
            canvas_size: CANVAS_SIZE,
            disk_size: DISK_SIZE,
            animation_step_ms: ANIMATION_STEP_MS,
        }
    }
}

impl Settings {
    /// Canvas center, where the circle is anchored
    pub fn origin(&self) -> (i32, i32) {
        (self.canvas_size / 2, self.canvas_size / 2)
    }

    /// Reject values the layout cannot place on an `i32` canvas
    pub fn validate(&self) -> Result<()> {
        if !(self.radius.is_finite() && self.radius > 0.0 && self.radius <= MAX_BOARD_EXTENT as f64)
        {
            return Err(JosephusError::InvalidRadius { radius: self.radius });
        }
        if !(1..=MAX_BOARD_EXTENT).contains(&self.canvas_size) {
            return Err(JosephusError::InvalidCanvasSize {
                size: self.canvas_size,
            });
        }
        if !(1..=MAX_BOARD_EXTENT).contains(&self.disk_size) {
            return Err(JosephusError::InvalidDiskSize { size: self.disk_size });
        }
        Ok(())
    }

    /// Parse and validate settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `path` if given, falling back to defaults on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
