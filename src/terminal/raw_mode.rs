//! Raw mode RAII guard.

use std::io;

use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};

/// Enables raw mode for key-by-key form input; restores cooked mode and the
/// cursor when dropped, including on early return or panic.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        if is_raw_mode_enabled()? {
            // Nested guard: the outer one owns restoration.
            return Ok(Self { active: false });
        }
        enable_raw_mode()?;
        Ok(Self { active: true })
    }

    pub fn release(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), Show);
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}
