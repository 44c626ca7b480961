//! Terminal clearing and guaranteed-once cleanup.

/// Side-effecting terminal primitives used at session start and exit.
///
/// Both operations are best effort and never fail from the caller's view.
pub trait TerminalReset {
    /// Clear the visible screen before the session banner is drawn.
    fn clear_screen(&self);

    /// Restore the terminal to a clean state when the session ends.
    fn reset(&self);
}

/// Calls [`TerminalReset::reset`] exactly once when dropped.
///
/// Armed at the top of a session so every exit path (normal return, `?`
/// propagation, panic unwinding) runs the cleanup. [`ResetGuard::reset_now`]
/// runs it early and disarms the guard.
pub struct ResetGuard<'a, T: TerminalReset + ?Sized> {
    terminal: &'a T,
    armed: bool,
}

impl<'a, T: TerminalReset + ?Sized> ResetGuard<'a, T> {
    pub fn new(terminal: &'a T) -> Self {
        Self {
            terminal,
            armed: true,
        }
    }

    /// Run the cleanup now instead of on drop.
    pub fn reset_now(mut self) {
        self.fire();
    }

    fn fire(&mut self) {
        if self.armed {
            self.armed = false;
            tracing::debug!("resetting terminal");
            self.terminal.reset();
        }
    }
}

impl<T: TerminalReset + ?Sized> Drop for ResetGuard<'_, T> {
    fn drop(&mut self) {
        self.fire();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Default)]
    struct CountingTerminal {
        clears: AtomicU32,
        resets: AtomicU32,
    }

    impl TerminalReset for CountingTerminal {
        fn clear_screen(&self) {
            self.clears.fetch_add(1, Ordering::SeqCst);
        }

        fn reset(&self) {
            self.resets.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_guard_resets_on_drop() {
        let terminal = CountingTerminal::default();
        {
            let _guard = ResetGuard::new(&terminal);
        }
        assert_eq!(terminal.resets.load(Ordering::SeqCst), 1);
        assert_eq!(terminal.clears.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_reset_now_does_not_fire_twice() {
        let terminal = CountingTerminal::default();
        let guard = ResetGuard::new(&terminal);
        guard.reset_now();
        assert_eq!(terminal.resets.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_guard_resets_on_early_return() {
        fn fails(terminal: &CountingTerminal) -> Result<(), String> {
            let _guard = ResetGuard::new(terminal);
            if terminal.resets.load(Ordering::SeqCst) == 0 {
                return Err("boom".to_string());
            }
            Ok(())
        }

        let terminal = CountingTerminal::default();
        assert!(fails(&terminal).is_err());
        assert_eq!(terminal.resets.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_guard_resets_on_panic() {
        let terminal = CountingTerminal::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = ResetGuard::new(&terminal);
            panic!("unexpected abort");
        }));
        assert!(result.is_err());
        assert_eq!(terminal.resets.load(Ordering::SeqCst), 1);
    }
}
