/// Entry point and game loop.

mod domain;
mod sim;
mod ui;

use std::io::{self, BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rand::Rng;

use domain::board::{HEIGHT, TICK_INTERVAL_MS, WIDTH};
use domain::entity::Command;
use sim::event::GameEvent;
use sim::step;
use sim::world::GameState;
use ui::input::InputState;
use ui::renderer::Renderer;
use ui::shutdown::ShutdownFlag;
use ui::terminal;

fn main() {
    let shutdown = ShutdownFlag::install().unwrap_or_else(|e| {
        eprintln!("Warning: signal handler not installed: {e}");
        ShutdownFlag::new()
    });

    let result = {
        let _guard = terminal::enter_raw_mode();
        run(&shutdown)
    };

    // Terminal is restored by now, so errors land on the normal screen
    if let Err(e) = result {
        eprintln!("Game error: {e:#}");
        std::process::exit(1);
    }
}

fn run(shutdown: &ShutdownFlag) -> Result<()> {
    let (cols, rows) = terminal::canvas_size();
    // Score line + board rows
    if i32::from(cols) < WIDTH || i32::from(rows) < HEIGHT + 1 {
        log::warn!("terminal is {cols}x{rows}, board needs {}x{}", WIDTH, HEIGHT + 1);
    }

    let mut rng = rand::rng();
    let mut input = InputState::new();
    let renderer = Renderer::new(BufWriter::with_capacity(16384, io::stdout()));
    let tick_rate = Duration::from_millis(TICK_INTERVAL_MS);

    game_loop(renderer, shutdown, &mut rng, tick_rate, || {
        input.drain_events();
        (!input.ctrl_c_pressed()).then(|| input.commands())
    })
}

/// Fixed-rate loop: input → update → render → sleep.
/// Runs until `poll_input` reports a quit (None), a termination signal
/// raises `shutdown`, or a frame fails to draw.
fn game_loop<W, R, F>(
    mut renderer: Renderer<W>,
    shutdown: &ShutdownFlag,
    rng: &mut R,
    tick_rate: Duration,
    mut poll_input: F,
) -> Result<()>
where
    W: Write,
    R: Rng + ?Sized,
    F: FnMut() -> Option<Vec<Command>>,
{
    let mut state = GameState::new(rng);

    while !shutdown.is_requested() {
        let tick_start = Instant::now();

        let Some(commands) = poll_input() else {
            break;
        };

        let events = step::tick(&mut state, &commands, rng);
        log_events(state.tick, &events);

        renderer.render(&state).context("failed to draw frame")?;

        std::thread::sleep(tick_rate.saturating_sub(tick_start.elapsed()));
    }

    if shutdown.is_requested() {
        log::debug!("termination signal at tick {}", state.tick);
    }
    Ok(())
}

fn log_events(tick: u64, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::MatchStarted => log::debug!("tick {tick}: match started"),
            GameEvent::PointScored { side, left, right } => {
                log::debug!("tick {tick}: point to {side:?}, score {left}-{right}")
            }
            GameEvent::MatchOver { winner } => {
                log::debug!("tick {tick}: match over, {winner:?} wins")
            }
            GameEvent::PaddleHit { side } => log::trace!("tick {tick}: {side:?} paddle hit"),
            GameEvent::WallBounce { x, y } => log::trace!("tick {tick}: wall bounce at ({x}, {y})"),
        }
    }
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════
