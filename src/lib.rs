//! Josephus Circle - a survivor-guessing puzzle
//!
//! Core modules:
//! - `sim`: Deterministic core (circle layout, elimination order, game session)
//! - `renderer`: Renderer boundary and the terminal renderer
//! - `platform`: Pointer hit testing against the drawn board
//! - `settings`: Difficulty tiers and board configuration
//! - `app`: Control loop tying a session to a renderer

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{JosephusError, Result};
pub use settings::{Difficulty, Settings};

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Radius of the soldier circle (pixels)
    pub const CIRCLE_RADIUS: f64 = 200.0;
    /// Canvas is square; the circle is centered on it
    pub const CANVAS_SIZE: i32 = 500;
    /// Diameter of a single soldier disk (pixels)
    pub const DISK_SIZE: i32 = 10;

    /// Soldiers skip this many positions per kill (every 2nd one dies)
    pub const DEFAULT_STEP: usize = 2;
    /// Delay between drawn kill arrows (milliseconds)
    pub const ANIMATION_STEP_MS: u64 = 250;

    /// Upper bound for radius, canvas and disk size; keeps every disk
    /// corner (center + radius + disk) well inside `i32`
    pub const MAX_BOARD_EXTENT: i32 = 1_000_000;

    /// Smallest circle the simulation accepts
    pub const MIN_COUNT: usize = 2;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: DVec2) -> (f64, f64) {
    (pos.length(), pos.y.atan2(pos.x))
}
