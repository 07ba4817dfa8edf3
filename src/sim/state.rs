//! Rounds and the game session state machine
//!
//! ```text
//! AwaitingSelection --select(survivor)--> Won
//! AwaitingSelection --select(other)-----> Lost --decide(Quit)--> Quit
//!                                          |
//!                                   decide(Retry), attempts += 1
//!                                          v
//! AwaitingSelection <------reset()------ NewRound
//! ```

use serde::{Deserialize, Serialize};

use super::count::CountProvider;
use super::josephus::{Elimination, simulate, survivor_position};
use super::layout::BoardLayout;
use crate::consts::DEFAULT_STEP;
use crate::error::{JosephusError, Result};
use crate::settings::{Difficulty, Settings};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Retry confirmed; waiting for a fresh round
    NewRound,
    /// Board drawn, waiting for the player's pick
    AwaitingSelection,
    /// Player picked the survivor (round over)
    Won,
    /// Player picked someone who dies; retry or quit pending
    Lost,
    /// Player gave up after losing
    Quit,
}

impl GamePhase {
    /// No further input is accepted
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Quit)
    }
}

/// Outcome of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Won,
    Lost,
}

/// Player's answer to the "try again?" prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetryDecision {
    Retry,
    Quit,
}

/// One playthrough: fixed count, layout and outcome. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    count: usize,
    step: usize,
    layout: BoardLayout,
    elimination: Elimination,
}

impl Round {
    /// Lay out `count` soldiers and run the elimination (every 2nd one dies)
    pub fn new(settings: &Settings, count: usize) -> Result<Self> {
        let elimination = simulate(count, DEFAULT_STEP)?;
        let layout = BoardLayout::new(settings, count)?;
        Ok(Self {
            count,
            step: DEFAULT_STEP,
            layout,
            elimination,
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn survivor(&self) -> usize {
        self.elimination.survivor
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn elimination(&self) -> &Elimination {
        &self.elimination
    }
}

/// A run of rounds at one difficulty, with the attempt counter they share
#[derive(Debug, Clone)]
pub struct GameSession<P: CountProvider> {
    settings: Settings,
    difficulty: Difficulty,
    counts: P,
    /// Confirmed retries after a wrong pick; never reset or decremented
    attempts: u32,
    round: Round,
    phase: GamePhase,
}

impl<P: CountProvider> GameSession<P> {
    /// Start a session with a first round drawn from `counts`
    pub fn new(settings: Settings, difficulty: Difficulty, mut counts: P) -> Result<Self> {
        settings.validate()?;
        let count = counts.sample(difficulty);
        let round = Self::build_round(&settings, count)?;
        Ok(Self {
            settings,
            difficulty,
            counts,
            attempts: 0,
            round,
            phase: GamePhase::AwaitingSelection,
        })
    }

    fn build_round(settings: &Settings, count: usize) -> Result<Round> {
        let round = Round::new(settings, count)?;
        let recurrence = survivor_position(round.count(), round.step())?;
        debug_assert_eq!(recurrence, round.survivor());
        log::debug!(
            "Round started: {} soldiers, step {}, survivor {} (recurrence {})",
            round.count(),
            round.step(),
            round.survivor(),
            recurrence
        );
        Ok(round)
    }

    fn expect_phase(&self, phase: GamePhase, action: &'static str) -> Result<()> {
        if self.phase != phase {
            return Err(JosephusError::InvalidTransition {
                phase: self.phase,
                action,
            });
        }
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Kill order for the renderer to animate; only available after a win
    pub fn winning_sequence(&self) -> Option<&Elimination> {
        (self.phase == GamePhase::Won).then(|| self.round.elimination())
    }

    /// Replace the current round with a fresh one of `count` soldiers
    pub fn start_round(&mut self, count: usize) -> Result<&Round> {
        self.expect_phase(GamePhase::NewRound, "start a round")?;
        self.round = Self::build_round(&self.settings, count)?;
        self.phase = GamePhase::AwaitingSelection;
        Ok(&self.round)
    }

    /// Judge the player's pick against the survivor
    pub fn select(&mut self, index: usize) -> Result<Verdict> {
        self.expect_phase(GamePhase::AwaitingSelection, "select a soldier")?;
        if index >= self.round.count() {
            return Err(JosephusError::EntityOutOfRange {
                index,
                count: self.round.count(),
            });
        }

        let verdict = if index == self.round.survivor() {
            self.phase = GamePhase::Won;
            Verdict::Won
        } else {
            self.phase = GamePhase::Lost;
            Verdict::Lost
        };
        log::info!("Soldier {} selected: {:?}", index, verdict);
        Ok(verdict)
    }

    /// Apply the player's answer after a loss
    pub fn decide(&mut self, decision: RetryDecision) -> Result<()> {
        self.expect_phase(GamePhase::Lost, "decide on a retry")?;
        match decision {
            RetryDecision::Retry => {
                self.attempts += 1;
                self.phase = GamePhase::NewRound;
            }
            RetryDecision::Quit => {
                self.phase = GamePhase::Quit;
            }
        }
        log::debug!("{:?} after loss (attempts {})", decision, self.attempts);
        Ok(())
    }

    /// Draw a new count and start a round with it
    pub fn reset(&mut self) -> Result<&Round> {
        self.expect_phase(GamePhase::NewRound, "reset")?;
        let count = self.counts.sample(self.difficulty);
        self.start_round(count)
    }

    /// Confirm a retry and immediately start the next round
    pub fn retry(&mut self) -> Result<&Round> {
        self.decide(RetryDecision::Retry)?;
        self.reset()
    }
}
