//! Waiting spinner shown while a message is in flight.
//!
//! `SpinnerIndicator` is the production [`ProgressIndicator`]: an indicatif
//! spinner on stdout cycling `- \ | /` every 100 ms. indicatif ticks it from
//! its own background thread and `finish_and_clear` erases the line before
//! returning, which is exactly the stop contract the session loop needs.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use nomi_core::progress::ProgressIndicator;

/// Glyph cycle. indicatif treats the last entry as the "finished" frame.
const TICK_STRINGS: &[&str] = &["-", "\\", "|", "/", " "];

const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub struct SpinnerIndicator {
    hidden: bool,
}

impl SpinnerIndicator {
    /// Spinner drawn on stdout (hidden automatically when stdout is not a terminal).
    pub fn new() -> Self {
        Self { hidden: false }
    }

    /// Spinner that never draws anything.
    pub fn hidden() -> Self {
        Self { hidden: true }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICK_STRINGS)
    }
}

impl Default for SpinnerIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressIndicator for SpinnerIndicator {
    type Handle = ProgressBar;

    fn start(&self) -> ProgressBar {
        let target = if self.hidden {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stdout()
        };
        let spinner = ProgressBar::with_draw_target(None, target);
        spinner.set_style(Self::style());
        spinner.enable_steady_tick(TICK_INTERVAL);
        spinner
    }

    fn stop(&self, spinner: ProgressBar) {
        spinner.finish_and_clear();
    }
}
