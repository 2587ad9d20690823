/// GameState: the complete snapshot of a running game.
///
/// Owned by the main loop and lent out by reference to the input step,
/// the update step and the renderer. Fixed-size, `Copy`, no heap data.

use rand::Rng;

use crate::domain::board::MAX_SCORE;
use crate::domain::entity::{Ball, Paddle, Side};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Title,
    Playing,
}

#[derive(Clone, Copy, Debug)]
pub struct GameState {
    pub phase: Phase,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score_left: u32,
    pub score_right: u32,
    /// Updates run since start, for log context.
    pub tick: u64,
}

impl GameState {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        GameState {
            phase: Phase::Title,
            left: Paddle::centered(),
            right: Paddle::centered(),
            ball: Ball::serve(rng),
            score_left: 0,
            score_right: 0,
            tick: 0,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Enter Playing with a fresh round: paddles and ball centered,
    /// random diagonal serve.
    pub fn start_match<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.phase = Phase::Playing;
        self.left = Paddle::centered();
        self.right = Paddle::centered();
        self.ball = Ball::serve(rng);
    }

    /// Credit a point and re-serve. Paddles and the other score are kept.
    pub fn award_point<R: Rng + ?Sized>(&mut self, side: Side, rng: &mut R) {
        match side {
            Side::Left => self.score_left += 1,
            Side::Right => self.score_right += 1,
        }
        self.ball = Ball::serve(rng);
    }

    /// Side that has reached the winning score, if any.
    pub fn winner(&self) -> Option<Side> {
        if self.score_left >= MAX_SCORE {
            Some(Side::Left)
        } else if self.score_right >= MAX_SCORE {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Back to the title screen with both scores cleared.
    pub fn return_to_title(&mut self) {
        self.phase = Phase::Title;
        self.score_left = 0;
        self.score_right = 0;
    }
}
