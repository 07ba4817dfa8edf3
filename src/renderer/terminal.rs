//! Plain-text renderer for terminals
//!
//! Draws the circle as a character plot plus a soldier table, reads picks
//! as either a soldier number or an `x,y` canvas position, and prints the
//! kill arrows one by one on a win.

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::time::Duration;

use glam::DVec2;

use super::palette::SoldierColor;
use super::{BoardView, PlayerInput, Renderer};
use crate::cartesian_to_polar;
use crate::sim::{RetryDecision, Trajectory};

/// Character plot dimensions (terminal cells are about twice as tall as wide)
const PLOT_COLS: usize = 49;
const PLOT_ROWS: usize = 25;

/// Terminal renderer over any line reader and writer
pub struct TerminalRenderer<R, W> {
    input: R,
    output: W,
    step_delay: Duration,
    canvas_size: i32,
}

impl TerminalRenderer<StdinLock<'static>, Stdout> {
    /// Renderer on the process's stdin/stdout
    pub fn stdio(step_delay: Duration) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), step_delay)
    }
}

impl<R: BufRead, W: Write> TerminalRenderer<R, W> {
    pub fn new(input: R, output: W, step_delay: Duration) -> Self {
        Self {
            input,
            output,
            step_delay,
            canvas_size: crate::consts::CANVAS_SIZE,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next input line, trimmed; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn plot(&mut self, marks: impl IntoIterator<Item = (DVec2, char)>) -> io::Result<()> {
        let mut grid = vec![vec![' '; PLOT_COLS]; PLOT_ROWS];
        let scale = self.canvas_size.max(1) as f64;
        for (center, glyph) in marks {
            let col = (center.x / scale * (PLOT_COLS - 1) as f64).round();
            let row = (center.y / scale * (PLOT_ROWS - 1) as f64).round();
            if (0.0..PLOT_COLS as f64).contains(&col) && (0.0..PLOT_ROWS as f64).contains(&row) {
                grid[row as usize][col as usize] = glyph;
            }
        }
        for row in grid {
            writeln!(self.output, "  {}", row.into_iter().collect::<String>().trim_end())?;
        }
        Ok(())
    }
}

/// Parse one line of board input
fn parse_input(line: &str) -> Option<PlayerInput> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Some(PlayerInput::Quit);
    }
    if let Some((x, y)) = line.split_once(',') {
        let x = x.trim().parse::<f64>().ok()?;
        let y = y.trim().parse::<f64>().ok()?;
        return Some(PlayerInput::Pointer(DVec2::new(x, y)));
    }
    line.parse::<usize>().ok().map(PlayerInput::Soldier)
}

/// Parse a yes/no answer
fn parse_answer(line: &str) -> Option<RetryDecision> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(RetryDecision::Retry),
        "n" | "no" | "q" | "quit" => Some(RetryDecision::Quit),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Renderer for TerminalRenderer<R, W> {
    fn draw_board(&mut self, board: &BoardView<'_>) -> io::Result<()> {
        self.canvas_size = board.canvas_size;
        let round = board.round;
        let origin = DVec2::splat((board.canvas_size / 2) as f64);

        writeln!(self.output)?;
        writeln!(
            self.output,
            "Difficulty: {:<10} Attempts: {}",
            board.difficulty.as_str().to_uppercase(),
            board.attempts
        )?;
        writeln!(
            self.output,
            "{} soldiers stand in a circle. Pick the spot where you survive.",
            round.count()
        )?;
        writeln!(self.output, "Hint: the white soldier (W) is the first killer.")?;
        writeln!(self.output)?;

        let marks: Vec<(DVec2, char)> = round
            .layout()
            .iter()
            .map(|(index, disk)| (disk.center(), SoldierColor::for_index(index).glyph()))
            .collect();
        self.plot(marks)?;
        writeln!(self.output)?;

        for (index, disk) in round.layout().iter() {
            let center = disk.center();
            let (_, theta) = cartesian_to_polar(center - origin);
            writeln!(
                self.output,
                "  #{:<3} {:<5} at ({:>3}, {:>3})  {:>5.1}°",
                index,
                SoldierColor::for_index(index).as_str(),
                center.x,
                center.y,
                theta.to_degrees().rem_euclid(360.0)
            )?;
        }
        self.output.flush()
    }

    fn next_input(&mut self) -> io::Result<PlayerInput> {
        loop {
            write!(self.output, "Your pick (number, x,y or q): ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(PlayerInput::Quit);
            };
            match parse_input(&line) {
                Some(input) => return Ok(input),
                None => writeln!(self.output, "Could not read '{}'.", line)?,
            }
        }
    }

    fn show_miss(&mut self) -> io::Result<()> {
        writeln!(self.output, "No soldier there.")?;
        self.output.flush()
    }

    fn animate_win(&mut self, trajectory: &Trajectory) -> io::Result<()> {
        writeln!(self.output, "You survive! The circle falls:")?;
        for segment in &trajectory.segments {
            writeln!(
                self.output,
                "  {:>3} -> {:<3}  ({}, {}) -> ({}, {})",
                segment.kill.killer,
                segment.kill.casualty,
                segment.from.x,
                segment.from.y,
                segment.to.x,
                segment.to.y
            )?;
            self.output.flush()?;
            if !self.step_delay.is_zero() {
                std::thread::sleep(self.step_delay);
            }
        }

        let marks: Vec<(DVec2, char)> = trajectory
            .segments
            .iter()
            .map(|segment| (segment.to, 'x'))
            .chain(std::iter::once((
                trajectory.survivor_disk.center(),
                SoldierColor::Red.glyph(),
            )))
            .collect();
        writeln!(self.output)?;
        self.plot(marks)?;
        writeln!(self.output, "Soldier {} is the last one standing.", trajectory.survivor)?;
        self.output.flush()
    }

    fn prompt_retry(&mut self) -> io::Result<RetryDecision> {
        loop {
            write!(self.output, "You died. Try again? [y/n]: ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(RetryDecision::Quit);
            };
            if let Some(decision) = parse_answer(&line) {
                return Ok(decision);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Difficulty, Settings};
    use crate::sim::Round;

    fn renderer(input: &str) -> TerminalRenderer<&[u8], Vec<u8>> {
        TerminalRenderer::new(input.as_bytes(), Vec::new(), Duration::ZERO)
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("3"), Some(PlayerInput::Soldier(3)));
        assert_eq!(parse_input(" q "), Some(PlayerInput::Quit));
        assert_eq!(
            parse_input("455, 255.5"),
            Some(PlayerInput::Pointer(DVec2::new(455.0, 255.5)))
        );
        assert_eq!(parse_input("-1"), None);
        assert_eq!(parse_input("abc"), None);
        assert_eq!(parse_input("1,x"), None);
    }

    #[test]
    fn test_next_input_skips_garbage_and_quits_at_eof() {
        let mut r = renderer("nope\n7\n");
        assert_eq!(r.next_input().unwrap(), PlayerInput::Soldier(7));
        assert_eq!(r.next_input().unwrap(), PlayerInput::Quit);
        let out = String::from_utf8(r.into_output()).unwrap();
        assert!(out.contains("Could not read 'nope'"));
    }

    #[test]
    fn test_prompt_retry() {
        let mut r = renderer("maybe\nY\nno\n");
        assert_eq!(r.prompt_retry().unwrap(), RetryDecision::Retry);
        assert_eq!(r.prompt_retry().unwrap(), RetryDecision::Quit);
        assert_eq!(r.prompt_retry().unwrap(), RetryDecision::Quit);
    }

    #[test]
    fn test_draw_board_lists_every_soldier() {
        let round = Round::new(&Settings::default(), 6).unwrap();
        let board = BoardView {
            round: &round,
            difficulty: Difficulty::Easy,
            attempts: 2,
            canvas_size: 500,
        };
        let mut r = renderer("");
        r.draw_board(&board).unwrap();
        let out = String::from_utf8(r.into_output()).unwrap();

        assert!(out.contains("Difficulty: EASY"));
        assert!(out.contains("Attempts: 2"));
        assert!(out.contains("#0   white at (455, 255)"));
        assert!(out.contains("#1   gold"));
        assert!(out.contains("#2   blue"));
        assert!(out.contains("#5   gold"));
        assert!(out.contains('W'));
    }

    #[test]
    fn test_table_uses_exact_centers_for_odd_disks() {
        let settings = Settings {
            disk_size: 11,
            ..Settings::default()
        };
        let round = Round::new(&settings, 4).unwrap();
        let board = BoardView {
            round: &round,
            difficulty: Difficulty::Easy,
            attempts: 0,
            canvas_size: settings.canvas_size,
        };
        let mut r = renderer("");
        r.draw_board(&board).unwrap();
        let out = String::from_utf8(r.into_output()).unwrap();
        assert!(out.contains("#0   white at (455.5, 255.5)"));
    }

    #[test]
    fn test_animate_win_prints_each_kill() {
        let round = Round::new(&Settings::default(), 6).unwrap();
        let trajectory = Trajectory::for_round(&round).unwrap();
        let mut r = renderer("");
        r.animate_win(&trajectory).unwrap();
        let out = String::from_utf8(r.into_output()).unwrap();

        assert_eq!(out.matches(" -> ").count(), 2 * 5);
        assert!(out.contains("Soldier 4 is the last one standing."));
        assert!(out.contains('R'));
    }
}
