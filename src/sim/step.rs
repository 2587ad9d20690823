/// The step functions: advance the game by one tick.
///
/// Processing order (driven by the main loop):
///   1. Input       — apply every pending command in arrival order
///   2. Update      — ball physics, only while Playing
///   3. Match check — a side at MAX_SCORE sends the game back to Title
///
/// `tick()` runs all three; the pieces are public so they can be tested
/// on their own.

use rand::Rng;

use crate::domain::entity::Command;
use crate::domain::physics;
use super::event::GameEvent;
use super::world::{GameState, Phase};

// ══════════════════════════════════════════════════════════════
// Main entry point
// ══════════════════════════════════════════════════════════════

pub fn tick<R: Rng + ?Sized>(
    state: &mut GameState,
    commands: &[Command],
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    apply_input(state, commands, rng, &mut events);
    if state.phase == Phase::Playing {
        update(state, rng, &mut events);
        check_match_end(state, &mut events);
    }
    events
}

// ══════════════════════════════════════════════════════════════
// Input
// ══════════════════════════════════════════════════════════════

/// Apply a batch of commands in order. Paddles move in any phase;
/// Start only matters on the title screen.
pub fn apply_input<R: Rng + ?Sized>(
    state: &mut GameState,
    commands: &[Command],
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    for cmd in commands {
        match *cmd {
            Command::Move(side, dir) => {
                state.paddle_mut(side).shift(dir);
            }
            Command::Start => {
                if state.phase == Phase::Title {
                    state.start_match(rng);
                    events.push(GameEvent::MatchStarted);
                }
            }
        }
    }
}

// ══════════════════════════════════════════════════════════════
// Update
// ══════════════════════════════════════════════════════════════

/// Advance the ball one tick and resolve a goal. No-op outside Playing.
pub fn update<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R, events: &mut Vec<GameEvent>) {
    if state.phase != Phase::Playing { return; }
    state.tick += 1;

    let out = physics::step_ball(&mut state.ball, &state.left, &state.right);
    if out.wall_bounce {
        events.push(GameEvent::WallBounce { x: state.ball.x, y: state.ball.y });
    }
    if let Some(side) = out.paddle_hit {
        events.push(GameEvent::PaddleHit { side });
    }
    if let Some(side) = out.scored_by {
        state.award_point(side, rng);
        events.push(GameEvent::PointScored {
            side,
            left: state.score_left,
            right: state.score_right,
        });
    }
}

/// End the match once a side reaches the winning score.
pub fn check_match_end(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if let Some(winner) = state.winner() {
        state.return_to_title();
        events.push(GameEvent::MatchOver { winner });
    }
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════
