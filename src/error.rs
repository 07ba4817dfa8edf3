//! Error types for the Josephus Circle crate.
//!
//! Contract violations (bad counts, steps, radii, out-of-range selections)
//! are reported here instead of panicking. A wrong guess is not an error: it
//! is the `Lost` phase of the session.

use crate::sim::GamePhase;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, JosephusError>;

/// Errors produced by the Josephus Circle core and its configuration layer.
#[derive(Debug, thiserror::Error)]
pub enum JosephusError {
    /// Soldier count below the minimum the operation accepts.
    #[error("invalid soldier count {count} (minimum is {min})")]
    InvalidCount {
        /// Count that was passed in.
        count: usize,
        /// Smallest accepted count.
        min: usize,
    },

    /// Step must be at least 1.
    #[error("invalid step {step} (must be at least 1)")]
    InvalidStep {
        /// Step that was passed in.
        step: usize,
    },

    /// Radius must be a positive, finite number.
    #[error("invalid radius {radius} (must be positive)")]
    InvalidRadius {
        /// Radius that was passed in.
        radius: f64,
    },

    /// Canvas size must be positive and bounded.
    #[error("invalid canvas size {size}")]
    InvalidCanvasSize {
        /// Size that was passed in.
        size: i32,
    },

    /// Disk size must be at least one pixel.
    #[error("invalid disk size {size}")]
    InvalidDiskSize {
        /// Size that was passed in.
        size: i32,
    },

    /// A selection referenced a soldier that is not on the board.
    #[error("soldier {index} is not on the board (count {count})")]
    EntityOutOfRange {
        /// Selected index.
        index: usize,
        /// Soldiers in the current round.
        count: usize,
    },

    /// The session cannot perform this action in its current phase.
    #[error("cannot {action} while {phase:?}")]
    InvalidTransition {
        /// Phase the session was in.
        phase: GamePhase,
        /// Action that was attempted.
        action: &'static str,
    },

    /// Settings file or terminal I/O failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for [`crate::Settings`].
    #[error("settings json: {0}")]
    Json(#[from] serde_json::Error),
}
