use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use glam::DVec2;

use josephus_circle::app::{Outcome, run};
use josephus_circle::renderer::{BoardView, PlayerInput, Renderer, TerminalRenderer};
use josephus_circle::sim::{FixedCounts, GameSession, RetryDecision, Trajectory};
use josephus_circle::{Difficulty, Settings};

/// Renderer that replays canned input and records what it was asked to show
#[derive(Default)]
struct Scripted {
    inputs: VecDeque<PlayerInput>,
    answers: VecDeque<RetryDecision>,
    boards: Vec<(usize, u32)>,
    misses: usize,
    animated: Option<Trajectory>,
}

impl Scripted {
    fn new(inputs: Vec<PlayerInput>, answers: Vec<RetryDecision>) -> Self {
        Self {
            inputs: inputs.into(),
            answers: answers.into(),
            ..Default::default()
        }
    }
}

impl Renderer for Scripted {
    fn draw_board(&mut self, board: &BoardView<'_>) -> io::Result<()> {
        self.boards.push((board.round.count(), board.attempts));
        Ok(())
    }

    fn next_input(&mut self) -> io::Result<PlayerInput> {
        Ok(self.inputs.pop_front().unwrap_or(PlayerInput::Quit))
    }

    fn show_miss(&mut self) -> io::Result<()> {
        self.misses += 1;
        Ok(())
    }

    fn animate_win(&mut self, trajectory: &Trajectory) -> io::Result<()> {
        self.animated = Some(trajectory.clone());
        Ok(())
    }

    fn prompt_retry(&mut self) -> io::Result<RetryDecision> {
        Ok(self.answers.pop_front().unwrap_or(RetryDecision::Quit))
    }
}

fn session(counts: Vec<usize>) -> GameSession<FixedCounts> {
    GameSession::new(Settings::default(), Difficulty::Easy, FixedCounts::new(counts)).unwrap()
}

#[test]
fn test_first_guess_wins() {
    // Survivor of 6 at step 2 is soldier 4
    let mut s = session(vec![6]);
    let mut r = Scripted::new(vec![PlayerInput::Soldier(4)], vec![]);

    assert_eq!(run(&mut s, &mut r).unwrap(), Outcome::Won { attempts: 0 });
    assert_eq!(r.boards, vec![(6, 0)]);
    let trajectory = r.animated.unwrap();
    assert_eq!(trajectory.survivor, 4);
    assert_eq!(trajectory.len(), 5);
}

#[test]
fn test_wrong_guess_retry_then_win() {
    // 6 soldiers: survivor 4. 8 soldiers: survivor 0.
    let mut s = session(vec![6, 8]);
    let mut r = Scripted::new(
        vec![PlayerInput::Soldier(1), PlayerInput::Soldier(0)],
        vec![RetryDecision::Retry],
    );

    assert_eq!(run(&mut s, &mut r).unwrap(), Outcome::Won { attempts: 1 });
    assert_eq!(r.boards, vec![(6, 0), (8, 1)]);
}

#[test]
fn test_wrong_guess_then_quit() {
    let mut s = session(vec![6]);
    let mut r = Scripted::new(vec![PlayerInput::Soldier(0)], vec![RetryDecision::Quit]);

    assert_eq!(run(&mut s, &mut r).unwrap(), Outcome::Quit { attempts: 0 });
    assert!(r.animated.is_none());
}

#[test]
fn test_misses_do_not_change_state() {
    let mut s = session(vec![6]);
    let survivor_center = s.round().layout().get(4).unwrap().center();
    let mut r = Scripted::new(
        vec![
            PlayerInput::Pointer(DVec2::new(250.0, 250.0)),
            PlayerInput::Soldier(6),
            PlayerInput::Pointer(survivor_center),
        ],
        vec![],
    );

    assert_eq!(run(&mut s, &mut r).unwrap(), Outcome::Won { attempts: 0 });
    assert_eq!(r.misses, 2);
    assert_eq!(r.boards.len(), 1);
}

#[test]
fn test_leaving_the_board() {
    let mut s = session(vec![5]);
    let mut r = Scripted::new(vec![PlayerInput::Quit], vec![]);
    assert_eq!(run(&mut s, &mut r).unwrap(), Outcome::Abandoned { attempts: 0 });
}

#[test]
fn test_terminal_renderer_full_game() {
    let mut s = session(vec![6, 2]);
    // Lose on 6 (pick 0), retry, then win on 2 (survivor 0) by clicking its disk
    let input = "0\ny\n455,255\n";
    let mut r = TerminalRenderer::new(input.as_bytes(), Vec::new(), Duration::ZERO);

    assert_eq!(run(&mut s, &mut r).unwrap(), Outcome::Won { attempts: 1 });
    let out = String::from_utf8(r.into_output()).unwrap();
    assert!(out.contains("Attempts: 0"));
    assert!(out.contains("Attempts: 1"));
    assert!(out.contains("Try again?"));
    assert!(out.contains("Soldier 0 is the last one standing."));
}
