//! Renderer boundary
//!
//! The core never draws. A renderer receives the board, turns player input
//! into soldier picks or pointer positions, plays the win animation and asks
//! whether to retry after a loss.

pub mod palette;
pub mod terminal;

pub use palette::SoldierColor;
pub use terminal::TerminalRenderer;

use std::io;

use glam::DVec2;

use crate::settings::Difficulty;
use crate::sim::{CountProvider, GameSession, RetryDecision, Round, Trajectory};

/// What the player did at the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerInput {
    /// Picked a soldier by number
    Soldier(usize),
    /// Clicked/tapped a canvas position; needs hit testing
    Pointer(DVec2),
    /// Left the game without answering
    Quit,
}

/// Read-only snapshot a renderer draws from
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub round: &'a Round,
    pub difficulty: Difficulty,
    pub attempts: u32,
    /// Side of the square canvas the layout was placed on
    pub canvas_size: i32,
}

impl<'a> BoardView<'a> {
    pub fn of<P: CountProvider>(session: &'a GameSession<P>) -> Self {
        Self {
            round: session.round(),
            difficulty: session.difficulty(),
            attempts: session.attempts(),
            canvas_size: session.settings().canvas_size,
        }
    }
}

/// Everything the game loop needs from a display
pub trait Renderer {
    /// Draw the circle, difficulty and attempt counter
    fn draw_board(&mut self, board: &BoardView<'_>) -> io::Result<()>;

    /// Block until the player does something
    fn next_input(&mut self) -> io::Result<PlayerInput>;

    /// Input did not land on a soldier; nothing changes
    fn show_miss(&mut self) -> io::Result<()>;

    /// Play the kill arrows in order, then mark the survivor
    fn animate_win(&mut self, trajectory: &Trajectory) -> io::Result<()>;

    /// Ask "try again?" after a wrong pick
    fn prompt_retry(&mut self) -> io::Result<RetryDecision>;
}
