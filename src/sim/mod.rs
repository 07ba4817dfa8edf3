//! Deterministic game core
//!
//! Everything with real logic lives here. This module must stay pure:
//! - No rendering or terminal dependencies
//! - Randomness only through a `CountProvider`
//! - Same inputs, same layout and kill order

pub mod count;
pub mod josephus;
pub mod layout;
pub mod state;
pub mod trajectory;

pub use count::{CountProvider, FixedCounts, RngState, SeededCounts};
pub use josephus::{Elimination, Kill, simulate, survivor_position};
pub use layout::{BoardLayout, DiskBounds, points_in_circumference};
pub use state::{GamePhase, GameSession, RetryDecision, Round, Verdict};
pub use trajectory::{Segment, Trajectory};
