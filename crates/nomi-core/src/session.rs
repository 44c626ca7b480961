//! Turn-level state for an interactive chat session.
//!
//! The session driver owns one [`SessionState`] for its lifetime. Each input
//! line is classified with [`classify_input`]; a dispatched line walks the
//! state through `Dispatching -> AwaitingIndicatorStop -> Rendering` and back
//! to `AwaitingInput`.

use std::fmt;

/// Reserved input token that ends the session.
pub const EXIT_SENTINEL: &str = "exit";

/// What to do with one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// The line was the exit sentinel.
    Exit,
    /// Send the line, untrimmed, as the message text.
    Send(String),
}

/// Classify a raw input line (without its line terminator).
///
/// The sentinel is matched after trimming surrounding whitespace and
/// ignoring case. Anything else, including an empty line, is sent verbatim.
pub fn classify_input(line: &str) -> InputAction {
    if line.trim().eq_ignore_ascii_case(EXIT_SENTINEL) {
        InputAction::Exit
    } else {
        InputAction::Send(line.to_string())
    }
}

/// Why a session loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The user typed the exit sentinel.
    UserExit,
    /// The input stream had no more lines.
    EndOfInput,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::UserExit => write!(f, "user_exit"),
            TerminationReason::EndOfInput => write!(f, "end_of_input"),
        }
    }
}

/// Where the session currently is within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingInput,
    Dispatching,
    AwaitingIndicatorStop,
    Rendering,
    Terminated(TerminationReason),
}

/// Process-local state of one chat session. Never persisted.
#[derive(Debug)]
pub struct SessionState {
    phase: SessionPhase,
    turns: u32,
    failures: u32,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::AwaitingInput,
            turns: 0,
            failures: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Number of dispatched turns so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Number of dispatched turns that ended in an error.
    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// A message has been handed to the exchange.
    pub fn begin_dispatch(&mut self) {
        debug_assert_eq!(self.phase, SessionPhase::AwaitingInput);
        self.phase = SessionPhase::Dispatching;
        self.turns += 1;
    }

    /// The exchange returned; the indicator is being stopped.
    pub fn exchange_completed(&mut self) {
        debug_assert_eq!(self.phase, SessionPhase::Dispatching);
        self.phase = SessionPhase::AwaitingIndicatorStop;
    }

    /// The indicator is gone; the turn's result may be written.
    pub fn indicator_stopped(&mut self) {
        debug_assert_eq!(self.phase, SessionPhase::AwaitingIndicatorStop);
        self.phase = SessionPhase::Rendering;
    }

    /// The turn's result has been written.
    pub fn rendered(&mut self, failed: bool) {
        debug_assert_eq!(self.phase, SessionPhase::Rendering);
        if failed {
            self.failures += 1;
        }
        self.phase = SessionPhase::AwaitingInput;
    }

    pub fn terminate(&mut self, reason: TerminationReason) {
        self.phase = SessionPhase::Terminated(reason);
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.phase, SessionPhase::Terminated(_))
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
