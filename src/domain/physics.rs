/// Ball physics — single source of truth for motion and collisions.
///
/// ## Order of resolution (one tick)
///
///   1. Move: position += velocity
///   2. Walls: if the ball is on or past a border row, flip vy
///   3. Paddles: point test at LEFT_HIT_X / RIGHT_HIT_X, flip vx on contact
///   4. Goals: x < 0 → right player scores, x >= WIDTH → left player scores
///
/// The wall test runs after the move, so the ball is drawn on the border
/// row for one frame before heading back. Paddle contact is tested on the
/// exact column only; at 1 cell/tick the ball cannot skip it.

use super::board::{HEIGHT, LEFT_HIT_X, RIGHT_HIT_X, WIDTH};
use super::entity::{Ball, Paddle, Side};

/// What happened to the ball during one step.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BallOutcome {
    pub wall_bounce: bool,
    pub paddle_hit: Option<Side>,
    /// Player who won the point, if the ball left the board.
    pub scored_by: Option<Side>,
}

#[inline]
pub fn advance(ball: &mut Ball) {
    ball.x += ball.vx;
    ball.y += ball.vy;
}

/// Flip vertical velocity if the ball touches a border row.
pub fn bounce_walls(ball: &mut Ball) -> bool {
    if ball.y <= 0 || ball.y >= HEIGHT - 1 {
        ball.vy = -ball.vy;
        true
    } else {
        false
    }
}

/// Flip horizontal velocity if the ball sits on a paddle's hit column
/// within its span. Left is tested first.
pub fn bounce_paddles(ball: &mut Ball, left: &Paddle, right: &Paddle) -> Option<Side> {
    if ball.x == LEFT_HIT_X && left.covers(ball.y) {
        ball.vx = -ball.vx;
        Some(Side::Left)
    } else if ball.x == RIGHT_HIT_X && right.covers(ball.y) {
        ball.vx = -ball.vx;
        Some(Side::Right)
    } else {
        None
    }
}

/// Which player scores if the ball has left the board horizontally.
pub fn goal(ball: &Ball) -> Option<Side> {
    if ball.x < 0 {
        Some(Side::Right)
    } else if ball.x >= WIDTH {
        Some(Side::Left)
    } else {
        None
    }
}

/// Run the full per-tick ball update. The caller handles re-serving
/// when `scored_by` is set.
pub fn step_ball(ball: &mut Ball, left: &Paddle, right: &Paddle) -> BallOutcome {
    advance(ball);
    let wall_bounce = bounce_walls(ball);
    let paddle_hit = bounce_paddles(ball, left, right);
    BallOutcome {
        wall_bounce,
        paddle_hit,
        scored_by: goal(ball),
    }
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════
