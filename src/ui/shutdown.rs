/// Shutdown flag raised by SIGINT, SIGTERM or SIGHUP.
///
/// The handler only flips an atomic; the main loop polls it once per tick
/// and leaves normally, so the raw-mode guard restores the terminal on the
/// way out. In raw mode Ctrl-C arrives as a key instead, which the input
/// layer handles.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct ShutdownFlag {
    requested: Arc<AtomicBool>,
}

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flag and route termination signals to it. Can only succeed
    /// once per process.
    pub fn install() -> Result<Self, ctrlc::Error> {
        let flag = ShutdownFlag::new();
        let handle = flag.clone();
        ctrlc::set_handler(move || handle.request())?;
        Ok(flag)
    }

    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}
