//! Raw-mode terminal setup for the quiz.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    ExecutableCommand,
    cursor::{Hide, Show},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, warn};

pub type QuizTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while the quiz runs and restores it when dropped.
pub struct TerminalGuard {
    terminal: QuizTerminal,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        if let Err(err) = io::stdout()
            .execute(EnterAlternateScreen)
            .and_then(|out| out.execute(Hide).map(|_| ()))
        {
            let _ = disable_raw_mode();
            return Err(err);
        }
        debug!("terminal entered raw mode");

        let terminal = or_restore(Terminal::new(CrosstermBackend::new(io::stdout())), restore)?;
        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut QuizTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore() {
            warn!(error = %err, "failed to restore terminal");
        } else {
            debug!("terminal restored");
        }
    }
}

/// Run `cleanup` when `result` is an error, keeping the original error.
fn or_restore<T>(result: io::Result<T>, cleanup: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    if result.is_err() {
        if let Err(err) = cleanup() {
            warn!(error = %err, "failed to restore terminal");
        }
    }
    result
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?.execute(Show)?;
    Ok(())
}

fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: io::Result<()> = or_restore(Err(io::Error::other("no tty")), || {
            restored.set(true);
            Ok(())
        });

        assert_eq!(result.unwrap_err().to_string(), "no tty");
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let restored = Cell::new(false);
        let result = or_restore(Ok(7), || {
            restored.set(true);
            Ok(())
        });

        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }
}
