//! Welcome banner display for chat sessions.

use std::io::{self, Write};

use console::style;

/// Print the session-start framing: title and usage hints.
pub fn print_welcome_banner(out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style(format!("=== Chat Session with {name} ===")).yellow()
    )?;
    writeln!(
        out,
        "{}",
        style("\u{2022} Type your message and press Enter to send").blue()
    )?;
    writeln!(out, "{}", style("\u{2022} Type 'exit' to end the session").blue())?;
    writeln!(out)?;
    Ok(())
}
