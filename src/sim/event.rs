/// Events emitted during a simulation step.
/// The main loop consumes these for logging.

use crate::domain::entity::Side;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEvent {
    MatchStarted,
    WallBounce { x: i32, y: i32 },
    PaddleHit { side: Side },
    PointScored { side: Side, left: u32, right: u32 },
    MatchOver { winner: Side },
}
