//! Taskboard CLI
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use clap::Parser;
use tracing_subscriber::EnvFilter;

use taskboard::commands;
use taskboard::{Cli, Commands};

async fn run(cli: Cli) -> anyhow::Result<String> {
    let config = commands::load_config(&cli)?;
    match &cli.command {
        Commands::Show { source, json } => commands::run_show(source, *json, &config).await,
        Commands::Replay { file, script, json } => {
            commands::run_replay(file, script, *json, &config).await
        }
        Commands::Config => commands::run_config(&config),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("taskboard=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(cli).await {
        Ok(output) => {
            println!("{}", output.trim_end());
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}
