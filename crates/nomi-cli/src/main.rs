//! Nomi chat client entry point.
//!
//! Binary name: `nomi`
//!
//! Parses CLI arguments, sets up logging, then dispatches to the command
//! handler. Any error that escapes a handler is printed as a single
//! diagnostic line and the process exits with status 1.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,nomi_cli=debug,nomi_core=debug,nomi_infra=debug",
        _ => "trace",
    };

    // Logs go to stderr so they never interleave with the transcript.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", console::style("!").red().bold());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Chat { name } => {
            cli::chat::loop_runner::run_chat(&name).await?;
        }

        Commands::List { json } => {
            cli::list::list_nomis(json).await?;
        }

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "nomi", &mut std::io::stdout());
        }
    }

    Ok(())
}
