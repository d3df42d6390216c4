//! Vault connection CLI.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "vaultconn")]
#[command(about = "Validate and inspect Vault connection definitions", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate connections and print their normalized parameters
    Validate {
        /// Path to the connection file
        #[arg(env = "VAULTCONN_FILE", default_value = "vault.kdl")]
        path: String,
        /// Only validate this connection
        #[arg(long)]
        connection: Option<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a one-line description of each connection
    Describe {
        /// Path to the connection file
        #[arg(env = "VAULTCONN_FILE", default_value = "vault.kdl")]
        path: String,
        /// Only describe this connection
        #[arg(long)]
        connection: Option<String>,
    },
    /// Print the parameters of a new connection
    Defaults {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate {
            path,
            connection,
            json,
        } => {
            let valid = commands::connections::validate(&path, connection.as_deref(), json)?;
            if !valid {
                std::process::exit(1);
            }
        }
        Commands::Describe { path, connection } => {
            commands::connections::describe(&path, connection.as_deref())?;
        }
        Commands::Defaults { json } => {
            commands::defaults(json)?;
        }
    }

    Ok(())
}
