/// Input state tracker.
///
/// Each tick the main loop calls `drain_events()`, which reads every key
/// event the terminal has buffered without blocking, in arrival order.
/// `commands()` then decodes the presses into game commands.
///
/// Paddles move one row per press, so there is no held-key tracking:
/// auto-repeat from the terminal is what keeps a paddle moving.

use std::time::Duration;

use crossterm::event::{self, poll, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::domain::entity::{Command, MoveDir, Side};

pub struct InputState {
    /// Key presses collected during the most recent drain, oldest first.
    pub raw_events: Vec<KeyEvent>,
}

impl InputState {
    pub fn new() -> Self {
        InputState {
            raw_events: Vec::with_capacity(8),
        }
    }

    /// Drain all pending terminal events. A read error ends the drain;
    /// whatever was collected so far still counts.
    pub fn drain_events(&mut self) {
        self.raw_events.clear();

        while poll(Duration::ZERO).unwrap_or(false) {
            match event::read() {
                Ok(Event::Key(key)) => self.record(key),
                Ok(_) => {}
                Err(_) => break,
            }
        }
    }

    fn record(&mut self, key: KeyEvent) {
        // Release events only show up with keyboard enhancement; they are not presses
        if key.kind != KeyEventKind::Release {
            self.raw_events.push(key);
        }
    }

    /// Decoded commands for this tick, in the order the keys arrived.
    pub fn commands(&self) -> Vec<Command> {
        self.raw_events.iter().filter_map(command_for).collect()
    }

    /// Check if any raw event this tick has Ctrl+C
    pub fn ctrl_c_pressed(&self) -> bool {
        self.raw_events.iter().any(|k| {
            k.modifiers.contains(KeyModifiers::CONTROL)
                && (k.code == KeyCode::Char('c') || k.code == KeyCode::Char('C'))
        })
    }
}

// ── Key map ──

/// Map a single key press to a command. Anything else, including keys
/// held with Ctrl or Alt, is ignored.
pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Char('w') => Some(Command::Move(Side::Left, MoveDir::Up)),
        KeyCode::Char('s') => Some(Command::Move(Side::Left, MoveDir::Down)),
        KeyCode::Char('o') => Some(Command::Move(Side::Right, MoveDir::Up)),
        KeyCode::Char('l') => Some(Command::Move(Side::Right, MoveDir::Down)),
        KeyCode::Char(' ') => Some(Command::Start),
        _ => None,
    }
}
