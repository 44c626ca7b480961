//! Transcript rendering: prompt, replies, and per-turn errors.

use std::io::{self, Write};

use console::style;

use nomi_types::error::ExchangeError;

/// Print the `You: ` prompt and flush so it shows before input is read.
pub fn print_prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}: ", style("You").green())?;
    out.flush()
}

/// Print a reply as `<name>: <text>`. An empty reply still gets its line.
pub fn print_reply(out: &mut impl Write, name: &str, text: &str) -> io::Result<()> {
    writeln!(out, "{}: {text}", style(name).blue())?;
    out.flush()
}

/// Print a failed turn as a single `! <error>` line.
pub fn print_turn_error(out: &mut impl Write, err: &ExchangeError) -> io::Result<()> {
    // Multi-line remote detail would break the one-line contract.
    let detail = err.to_string().replace(['\r', '\n'], " ");
    writeln!(out, "{} {detail}", style("!").red().bold())?;
    out.flush()
}

/// Print the farewell line for the exit sentinel.
pub fn print_farewell(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Chat session ended.")?;
    out.flush()
}
