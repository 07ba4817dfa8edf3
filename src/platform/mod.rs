//! Platform abstraction layer
//!
//! Handles the input side of the board:
//! - Resolving a pointer position to the soldier drawn under it

pub mod hit_test;

pub use hit_test::{BoardHitTester, HitResolver};
