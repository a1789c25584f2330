//! KillPort CLI - Find and kill processes on network ports
//!
//! A command-line host for the killport-core engine: look up which
//! processes hold a port, then terminate them.

mod commands;
mod logging;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use killport_core::KillPortEngine;

#[derive(Parser)]
#[command(name = "killport")]
#[command(author, version, about = "Find and kill processes on network ports")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Path to the lsof binary (overrides config and KILLPORT_LSOF)
    #[arg(long, global = true, value_name = "PATH")]
    lsof: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show processes using one or more ports
    #[command(alias = "search")]
    Find {
        /// Ports, separated by spaces, commas or semicolons
        #[arg(required = true)]
        ports: Vec<String>,
    },

    /// List all listening TCP ports
    #[command(alias = "ls")]
    List,

    /// Kill processes by PID (SIGTERM, falling back to SIGKILL)
    Kill {
        /// Process IDs
        #[arg(required = true)]
        pids: Vec<String>,
    },

    /// Kill every process using the given ports
    Free {
        /// Ports, separated by spaces, commas or semicolons
        #[arg(required = true)]
        ports: Vec<String>,
    },

    /// Show current configuration
    Config,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let mut config = KillPortEngine::load_config()?;
    if let Some(path) = cli.lsof {
        config.lsof_path = path;
    }
    let engine = KillPortEngine::with_config(config)?;

    let success = match cli.command {
        Commands::Find { ports } => commands::find::run(&engine, &ports.join(" "), cli.json)?,
        Commands::List => commands::list::run(&engine, cli.json)?,
        Commands::Kill { pids } => commands::kill::run(&engine, &pids, cli.json)?,
        Commands::Free { ports } => commands::free::run(&engine, &ports.join(" "), cli.json)?,
        Commands::Config => commands::config::show(&engine, cli.json)?,
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
