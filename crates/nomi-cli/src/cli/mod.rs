//! CLI command definitions and dispatch for the `nomi` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod list;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use nomi_infra::config::load_client_config;
use nomi_infra::nomi::NomiClient;

/// Chat with your Nomis from the terminal.
#[derive(Parser)]
#[command(name = "nomi", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all log output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed log output on stderr (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a live chat session with a specific Nomi.
    Chat {
        /// Name of the Nomi (case-insensitive).
        name: String,
    },

    /// List the Nomis available to your API key.
    #[command(alias = "ls")]
    List {
        /// Output the raw listing as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// Load configuration and build the HTTP client shared by the commands.
pub async fn connect() -> anyhow::Result<NomiClient> {
    let config = load_client_config().await?;
    tracing::debug!(base_url = %config.base_url, "client configuration loaded");
    Ok(NomiClient::new(&config)?)
}
