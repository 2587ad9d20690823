/// Presentation layer: title screen and playfield.
///
/// How it works:
///   - Title: clear the screen, then draw the logo and instructions at
///     fixed rows derived from WIDTH/HEIGHT. Every line, the two control
///     lines included, is centered on its own length; both control lines
///     start at column 17.
///   - Playing: home the cursor (no clear, so no flicker), print the score
///     line, then every row of the board. The board is composed into a
///     `FrameBuffer` first, which keeps the cell rules testable without a
///     terminal.
///
/// All commands are batched with `queue!` and flushed once per frame.

use std::io::{self, Write};

use crate::domain::board::{HEIGHT, WIDTH};
use crate::sim::world::{GameState, Phase};
use super::terminal::Screen;

// ── Glyphs ──

const PADDLE: u8 = b'|';
const BALL: u8 = b'O';
const BORDER: u8 = b'-';
const EMPTY: u8 = b' ';

const LOGO: [&str; 8] = [
    r" ______                 ",
    r" | ___ \                ",
    r" | |_/ /__  _ __   __ _ ",
    r" |  __/ _ \| '_ \ / _` |",
    r" | | | (_) | | | | (_| |",
    r" \_|  \___/|_| |_|\__, |",
    r"                   __/ |",
    r"                   |___/",
];

/// Instruction lines as (row offset below HEIGHT/2, text).
const INSTRUCTIONS: [(u16, &str); 4] = [
    (7, "Ctrl-C to quit"),
    (9, "Press 'space' to start"),
    (11, "Left Player: 'w' to move up, 's' to move down"),
    (12, "Right Player: 'o' to move up, 'l' to move down"),
];

// ── FrameBuffer: the board as rows of glyphs ──

pub struct FrameBuffer {
    cells: Vec<u8>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            cells: vec![EMPTY; (WIDTH * HEIGHT) as usize],
        }
    }

    /// Fill every cell from the game state.
    /// Precedence: paddle > ball > border > empty.
    pub fn compose(&mut self, state: &GameState) {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let paddle = (x == 0 && state.left.covers(y))
                    || (x == WIDTH - 1 && state.right.covers(y));
                let glyph = if paddle {
                    PADDLE
                } else if x == state.ball.x && y == state.ball.y {
                    BALL
                } else if y == 0 || y == HEIGHT - 1 {
                    BORDER
                } else {
                    EMPTY
                };
                self.cells[(y * WIDTH + x) as usize] = glyph;
            }
        }
    }

    pub fn row(&self, y: i32) -> &str {
        let start = (y * WIDTH) as usize;
        // Glyphs are all ASCII
        std::str::from_utf8(&self.cells[start..start + WIDTH as usize]).unwrap_or("")
    }

    #[cfg(test)]
    fn at(&self, x: i32, y: i32) -> char {
        self.cells[(y * WIDTH + x) as usize] as char
    }
}

/// Title screen placement as (1-based row, 1-based col, text).
pub fn title_layout() -> Vec<(u16, u16, &'static str)> {
    let top = (HEIGHT / 4) as u16;
    let mid = (HEIGHT / 2) as u16;
    let logo = LOGO
        .iter()
        .enumerate()
        .map(|(i, line)| (top + i as u16, centered_col(line), *line));
    let text = INSTRUCTIONS
        .iter()
        .map(|&(offset, line)| (mid + offset, centered_col(line), line));
    logo.chain(text).collect()
}

fn centered_col(text: &str) -> u16 {
    (WIDTH as usize).saturating_sub(text.len()) as u16 / 2
}

pub fn score_line(state: &GameState) -> String {
    let line = format!("Score: {} - {}", state.score_left, state.score_right);
    // Pad to full width so a shorter score never leaves stale digits behind
    format!("{:<width$}", line, width = WIDTH as usize)
}

// ── Renderer ──

pub struct Renderer<W: Write> {
    screen: Screen<W>,
    frame: FrameBuffer,
}

impl<W: Write> Renderer<W> {
    pub fn new(writer: W) -> Self {
        Renderer {
            screen: Screen::new(writer),
            frame: FrameBuffer::new(),
        }
    }

    pub fn render(&mut self, state: &GameState) -> io::Result<()> {
        match state.phase {
            Phase::Title => self.render_title()?,
            Phase::Playing => self.render_game(state)?,
        }
        self.screen.flush()
    }

    fn render_title(&mut self) -> io::Result<()> {
        self.screen.clear_screen()?;
        for (row, col, text) in title_layout() {
            self.screen.draw_text(row, col, text)?;
        }
        Ok(())
    }

    fn render_game(&mut self, state: &GameState) -> io::Result<()> {
        self.frame.compose(state);
        self.screen.home()?;
        self.screen.draw_text(1, 1, &score_line(state))?;
        for y in 0..HEIGHT {
            self.screen.draw_text(y as u16 + 2, 1, self.frame.row(y))?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl Renderer<Vec<u8>> {
    fn output(&self) -> String {
        String::from_utf8_lossy(self.screen.get_ref()).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::PADDLE_MAX_Y;
    use crate::domain::entity::{Ball, Paddle};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn playing_state() -> GameState {
        let mut r = StdRng::seed_from_u64(3);
        let mut s = GameState::new(&mut r);
        s.start_match(&mut r);
        s
    }

    fn framed(state: &GameState) -> FrameBuffer {
        let mut fb = FrameBuffer::new();
        fb.compose(state);
        fb
    }

    // ── frame composition ──

    #[test]
    fn borders_and_paddles() {
        let s = playing_state();
        let fb = framed(&s);
        assert_eq!(fb.at(5, 0), '-');
        assert_eq!(fb.at(5, HEIGHT - 1), '-');
        assert_eq!(fb.at(5, 5), ' ');
        for y in 12..15 {
            assert_eq!(fb.at(0, y), '|');
            assert_eq!(fb.at(WIDTH - 1, y), '|');
        }
        assert_eq!(fb.at(0, 11), ' ');
        assert_eq!(fb.at(0, 15), ' ');
    }

    #[test]
    fn ball_is_drawn() {
        let mut s = playing_state();
        s.ball = Ball { x: 30, y: 7, vx: 1, vy: 1 };
        let fb = framed(&s);
        assert_eq!(fb.at(30, 7), 'O');
        assert_eq!(fb.row(7).matches('O').count(), 1);
    }

    #[test]
    fn paddle_hides_ball() {
        let mut s = playing_state();
        s.ball = Ball { x: 0, y: 13, vx: -1, vy: 1 };
        let fb = framed(&s);
        assert_eq!(fb.at(0, 13), '|');
        assert!(!(0..HEIGHT).any(|y| fb.row(y).contains('O')));
    }

    #[test]
    fn ball_beats_border() {
        let mut s = playing_state();
        s.ball = Ball { x: 20, y: 0, vx: 1, vy: 1 };
        assert_eq!(framed(&s).at(20, 0), 'O');
    }

    #[test]
    fn paddle_beats_border() {
        let mut s = playing_state();
        s.left = Paddle::at(0);
        s.right = Paddle::at(PADDLE_MAX_Y);
        let fb = framed(&s);
        assert_eq!(fb.at(0, 0), '|');
        assert_eq!(fb.at(WIDTH - 1, HEIGHT - 1), '|');
        assert_eq!(fb.at(1, 0), '-');
    }

    #[test]
    fn off_board_ball_is_not_drawn() {
        let mut s = playing_state();
        s.ball = Ball { x: -1, y: 5, vx: -1, vy: 1 };
        let fb = framed(&s);
        assert!(!(0..HEIGHT).any(|y| fb.row(y).contains('O')));
    }

    #[test]
    fn rows_are_full_width() {
        let fb = framed(&playing_state());
        for y in 0..HEIGHT {
            assert_eq!(fb.row(y).len(), WIDTH as usize);
        }
    }

    // ── title ──

    #[test]
    fn title_logo_is_centered_from_row_six() {
        let layout = title_layout();
        assert_eq!(layout.len(), LOGO.len() + INSTRUCTIONS.len());
        assert_eq!(layout[0], (6, 28, LOGO[0]));
        assert_eq!(layout[7].0, 13);
        for (_, col, text) in &layout {
            let left = *col as usize;
            let right = WIDTH as usize - left - text.len();
            assert!(left.abs_diff(right) <= 1, "{text:?} not centered");
        }
    }

    #[test]
    fn title_instructions_below_middle() {
        let layout = title_layout();
        let start = layout.iter().find(|(_, _, t)| t.contains("space")).unwrap();
        assert_eq!(start.0, 21);
        assert!(layout.iter().any(|(row, _, t)| *row == 23 && t.starts_with("Left Player")));
        assert!(layout.iter().any(|(row, _, t)| *row == 24 && t.starts_with("Right Player")));
    }

    #[test]
    fn control_lines_centered_on_own_length() {
        let layout = title_layout();
        let controls: Vec<_> = layout.iter().filter(|(_, _, t)| t.contains("Player")).collect();
        assert_eq!(controls.len(), 2);
        for (_, col, text) in controls {
            assert_eq!(*col, 17, "{text:?}");
        }
    }

    // ── output ──

    #[test]
    fn score_line_is_padded() {
        let mut s = playing_state();
        s.score_left = 3;
        s.score_right = 1;
        let line = score_line(&s);
        assert!(line.starts_with("Score: 3 - 1 "));
        assert_eq!(line.len(), WIDTH as usize);
    }

    #[test]
    fn game_frame_homes_without_clearing() {
        let s = playing_state();
        let mut r = Renderer::new(Vec::new());
        r.render(&s).unwrap();
        let out = r.output();
        assert!(out.starts_with("\x1b[1;1H"));
        assert!(!out.contains("\x1b[2J"));
        assert!(out.contains("Score: 0 - 0"));
        // Score row plus one write per board row
        assert_eq!(out.matches("\x1b[").count(), 1 + 1 + HEIGHT as usize);
        assert!(out.contains(&format!("\x1b[{};1H", HEIGHT + 1)));
    }

    #[test]
    fn title_frame_clears_first() {
        let mut r = Renderer::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(3);
        let s = GameState::new(&mut rng);
        r.render(&s).unwrap();
        let out = r.output();
        assert!(out.starts_with("\x1b[2J"));
        assert!(out.contains("Press 'space' to start"));
        assert!(!out.contains("Score:"));
    }
}
