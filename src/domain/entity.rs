/// Entities: Paddle, Ball, and the player commands that move them.

use rand::Rng;

use super::board::{CENTER_X, CENTER_Y, PADDLE_HEIGHT, PADDLE_MAX_Y};

/// Which player a paddle, point or command belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

/// Paddle movement direction (one row per key press)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveDir {
    Up,
    Down,
}

/// A decoded key press. The terminal layer produces these; the step
/// function consumes them in arrival order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Move(Side, MoveDir),
    Start,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Paddle {
    /// Row of the paddle's top cell, always in [0, PADDLE_MAX_Y].
    pub y: i32,
}

impl Paddle {
    pub fn centered() -> Self {
        Paddle::at(CENTER_Y)
    }

    pub fn at(y: i32) -> Self {
        Paddle { y: y.clamp(0, PADDLE_MAX_Y) }
    }

    /// Move one row, clamped to the board. Returns false if already at the edge.
    pub fn shift(&mut self, dir: MoveDir) -> bool {
        let next = match dir {
            MoveDir::Up => self.y - 1,
            MoveDir::Down => self.y + 1,
        };
        let clamped = next.clamp(0, PADDLE_MAX_Y);
        let moved = clamped != self.y;
        self.y = clamped;
        moved
    }

    /// Does the paddle's vertical span include `row`?
    #[inline]
    pub fn covers(&self, row: i32) -> bool {
        row >= self.y && row < self.y + PADDLE_HEIGHT
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
}

impl Ball {
    /// Ball at the board center heading along a random diagonal.
    pub fn serve<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Ball {
            x: CENTER_X,
            y: CENTER_Y,
            vx: random_unit(rng),
            vy: random_unit(rng),
        }
    }
}

fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    if rng.random_bool(0.5) { -1 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn paddle_clamps_at_top() {
        let mut p = Paddle::at(0);
        assert!(!p.shift(MoveDir::Up));
        assert_eq!(p.y, 0);
        assert!(p.shift(MoveDir::Down));
        assert_eq!(p.y, 1);
    }

    #[test]
    fn paddle_clamps_at_bottom() {
        let mut p = Paddle::at(PADDLE_MAX_Y);
        assert!(!p.shift(MoveDir::Down));
        assert_eq!(p.y, PADDLE_MAX_Y);
    }

    #[test]
    fn paddle_at_clamps_out_of_range() {
        assert_eq!(Paddle::at(-4).y, 0);
        assert_eq!(Paddle::at(100).y, PADDLE_MAX_Y);
    }

    #[test]
    fn paddle_span_is_three_rows() {
        let p = Paddle::at(10);
        assert!(!p.covers(9));
        assert!(p.covers(10));
        assert!(p.covers(12));
        assert!(!p.covers(13));
    }

    #[test]
    fn serve_is_centered_and_diagonal() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let b = Ball::serve(&mut rng);
            assert_eq!((b.x, b.y), (CENTER_X, CENTER_Y));
            assert!(b.vx == -1 || b.vx == 1);
            assert!(b.vy == -1 || b.vy == 1);
        }
    }

    #[test]
    fn serve_uses_both_directions() {
        let mut rng = StdRng::seed_from_u64(42);
        let serves: Vec<Ball> = (0..64).map(|_| Ball::serve(&mut rng)).collect();
        assert!(serves.iter().any(|b| b.vx < 0));
        assert!(serves.iter().any(|b| b.vx > 0));
    }
}
