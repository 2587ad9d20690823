/// Terminal adapter: raw-mode guard and positional text output.
///
/// `enter_raw_mode()` hands back a guard; dropping it restores the
/// terminal (cooked mode, visible cursor, main screen). A panic hook does
/// the same before the panic message prints, so a crash never leaves the
/// shell in raw mode.
///
/// `Screen` wraps any writer. All commands are batched with `queue!` and
/// go out on `flush()`.

use std::io::{self, Write};
use std::sync::Once;

use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{Print, ResetColor},
    terminal::{self, Clear, ClearType},
};

/// Canvas assumed when the terminal cannot report its size.
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

// ── Raw mode guard ──

pub struct RawModeGuard {
    raw: bool,
}

/// Switch the terminal to raw mode on the alternate screen with the cursor
/// hidden. If raw mode is unavailable the game still runs, just with
/// line-buffered, echoed input.
pub fn enter_raw_mode() -> RawModeGuard {
    install_panic_hook();

    let raw = match terminal::enable_raw_mode() {
        Ok(()) => true,
        Err(e) => {
            log::warn!("raw mode unavailable, continuing without it: {e}");
            false
        }
    };

    if let Err(e) = execute!(
        io::stdout(),
        terminal::EnterAlternateScreen,
        cursor::Hide,
        Clear(ClearType::All)
    ) {
        log::warn!("terminal setup incomplete: {e}");
    }

    RawModeGuard { raw }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        restore_screen();
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}

fn restore_screen() {
    let _ = execute!(
        io::stdout(),
        ResetColor,
        cursor::Show,
        terminal::LeaveAlternateScreen
    );
}

/// Undo everything `enter_raw_mode` did. Safe to call more than once.
fn restore_terminal() {
    restore_screen();
    let _ = terminal::disable_raw_mode();
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));
    });
}

/// Terminal size in (columns, rows), or 80×24 if the query fails.
pub fn canvas_size() -> (u16, u16) {
    terminal::size().unwrap_or(FALLBACK_SIZE)
}

// ── Screen ──

pub struct Screen<W: Write> {
    writer: W,
}

impl<W: Write> Screen<W> {
    pub fn new(writer: W) -> Self {
        Screen { writer }
    }

    pub fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0))
    }

    pub fn home(&mut self) -> io::Result<()> {
        queue!(self.writer, MoveTo(0, 0))
    }

    /// Write `text` starting at a 1-based (row, col), VT100 style.
    pub fn draw_text(&mut self, row: u16, col: u16, text: &str) -> io::Result<()> {
        queue!(
            self.writer,
            MoveTo(col.saturating_sub(1), row.saturating_sub(1)),
            Print(text)
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    #[cfg(test)]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}
