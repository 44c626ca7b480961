//! Main chat loop orchestration.
//!
//! Coordinates one conversation: target resolution, welcome banner, the
//! read-send-wait-render loop, and terminal cleanup on every exit path.

use std::io::Write;

use tokio::io::AsyncBufRead;
use tracing::{debug, info};

use nomi_core::exchange::MessageExchange;
use nomi_core::progress::ProgressIndicator;
use nomi_core::resolver::IdentityResolver;
use nomi_core::session::{InputAction, SessionState, TerminationReason, classify_input};
use nomi_core::terminal::{ResetGuard, TerminalReset};
use nomi_infra::terminal::CrosstermTerminal;
use nomi_types::nomi::ConversationTarget;

use super::banner::print_welcome_banner;
use super::input::read_line;
use super::renderer::{print_farewell, print_prompt, print_reply, print_turn_error};
use super::spinner::SpinnerIndicator;

/// Drives a single chat session against one target.
///
/// Strictly sequential: a line is read, sent, and rendered before the next
/// line is read. The indicator is started for every dispatched line and
/// always stopped before that line's result is written.
pub struct SessionDriver<E, P, T> {
    exchange: E,
    indicator: P,
    terminal: T,
}

impl<E, P, T> SessionDriver<E, P, T>
where
    E: MessageExchange,
    P: ProgressIndicator,
    T: TerminalReset,
{
    pub fn new(exchange: E, indicator: P, terminal: T) -> Self {
        Self {
            exchange,
            indicator,
            terminal,
        }
    }

    /// Run the loop until the exit sentinel or end of input.
    ///
    /// The terminal is reset exactly once when this returns, whichever way
    /// it returns. Per-turn exchange errors are printed and never end the
    /// session; only an I/O error on `input` or `output` does.
    pub async fn run<R, W>(
        &self,
        target: &ConversationTarget,
        mut input: R,
        output: &mut W,
    ) -> anyhow::Result<TerminationReason>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let _reset = ResetGuard::new(&self.terminal);
        self.terminal.clear_screen();
        print_welcome_banner(output, &target.name)?;

        let mut state = SessionState::new();
        let reason = loop {
            print_prompt(output)?;
            let Some(line) = read_line(&mut input).await? else {
                // Keep the shell prompt off the dangling "You: " line.
                writeln!(output)?;
                break TerminationReason::EndOfInput;
            };

            match classify_input(&line) {
                InputAction::Exit => {
                    print_farewell(output)?;
                    break TerminationReason::UserExit;
                }
                InputAction::Send(text) => {
                    self.dispatch(&mut state, target, &text, output).await?;
                }
            }
        };

        state.terminate(reason);
        debug!(
            %reason,
            turns = state.turns(),
            failures = state.failures(),
            "chat session finished"
        );
        Ok(reason)
    }

    /// One turn: send with the indicator running, stop it, then render.
    async fn dispatch<W: Write>(
        &self,
        state: &mut SessionState,
        target: &ConversationTarget,
        text: &str,
        output: &mut W,
    ) -> std::io::Result<()> {
        state.begin_dispatch();
        let handle = self.indicator.start();
        let result = self.exchange.send(target, text).await;
        state.exchange_completed();

        self.indicator.stop(handle);
        state.indicator_stopped();

        match &result {
            Ok(reply) => print_reply(output, &target.name, reply)?,
            Err(e) => {
                debug!(kind = %e.kind(), error = %e, turn = state.turns(), "turn failed");
                print_turn_error(output, e)?;
            }
        }
        state.rendered(result.is_err());
        Ok(())
    }
}

/// Resolve `name` and, if that succeeds, run the session.
///
/// A resolution failure is returned before anything is drawn: no banner, no
/// prompt, no exchange call, and no terminal reset.
pub async fn run_session<Res, E, P, T, R, W>(
    resolver: &Res,
    driver: &SessionDriver<E, P, T>,
    name: &str,
    input: R,
    output: &mut W,
) -> anyhow::Result<TerminationReason>
where
    Res: IdentityResolver,
    E: MessageExchange,
    P: ProgressIndicator,
    T: TerminalReset,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let target = resolver.resolve(name).await?;
    info!(name = %target.name, id = %target.id, "starting chat session");
    driver.run(&target, input, output).await
}

/// `nomi chat <NAME>`: interactive session on stdin/stdout.
pub async fn run_chat(name: &str) -> anyhow::Result<()> {
    let client = crate::cli::connect().await?;
    let driver = SessionDriver::new(&client, SpinnerIndicator::new(), CrosstermTerminal::new());

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let reason = run_session(&client, &driver, name, stdin, &mut stdout).await?;

    info!(%reason, "chat session ended");
    Ok(())
}
