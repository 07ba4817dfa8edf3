//! Game loop: drives a session through a renderer until the player wins or quits

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::platform::{BoardHitTester, HitResolver};
use crate::renderer::{BoardView, PlayerInput, Renderer};
use crate::sim::{CountProvider, GamePhase, GameSession, Trajectory};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Survivor found; attempts is the number of retries it took
    Won { attempts: u32 },
    /// Player declined to retry after a loss
    Quit { attempts: u32 },
    /// Player left while the board was waiting for a pick
    Abandoned { attempts: u32 },
}

fn announce_round<P: CountProvider>(session: &GameSession<P>) {
    log::info!(
        "Josephus Circle with {} soldiers and difficulty is set to {}",
        session.round().count(),
        session.difficulty().as_str().to_uppercase()
    );
}

/// Wait for a pick that lands on a soldier; `None` if the player leaves
fn await_pick<P: CountProvider, R: Renderer>(
    session: &GameSession<P>,
    renderer: &mut R,
) -> Result<Option<usize>> {
    let hits = BoardHitTester::new(session.round().layout());
    let count = session.round().count();

    loop {
        let picked = match renderer.next_input()? {
            PlayerInput::Soldier(index) => (index < count).then_some(index),
            PlayerInput::Pointer(point) => hits.resolve(point),
            PlayerInput::Quit => return Ok(None),
        };
        match picked {
            Some(index) => return Ok(Some(index)),
            None => renderer.show_miss()?,
        }
    }
}

/// Play rounds until the session reaches a terminal phase
pub fn run<P: CountProvider, R: Renderer>(
    session: &mut GameSession<P>,
    renderer: &mut R,
) -> Result<Outcome> {
    announce_round(session);

    loop {
        match session.phase() {
            GamePhase::AwaitingSelection => {
                renderer.draw_board(&BoardView::of(session))?;
                let Some(index) = await_pick(session, renderer)? else {
                    log::info!("Board left without a pick");
                    return Ok(Outcome::Abandoned {
                        attempts: session.attempts(),
                    });
                };
                session.select(index)?;
            }
            GamePhase::Won => {
                if let Some(trajectory) = Trajectory::for_round(session.round()) {
                    renderer.animate_win(&trajectory)?;
                }
                return Ok(Outcome::Won {
                    attempts: session.attempts(),
                });
            }
            GamePhase::Lost => {
                let decision = renderer.prompt_retry()?;
                session.decide(decision)?;
            }
            GamePhase::NewRound => {
                session.reset()?;
                announce_round(session);
            }
            GamePhase::Quit => {
                return Ok(Outcome::Quit {
                    attempts: session.attempts(),
                });
            }
        }
    }
}
