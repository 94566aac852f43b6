//! Respin CLI
//!
//! Command-line interface for respin

use clap::{Parser, Subcommand};
use respin_core::logging::{self, Profile};

mod commands;
mod prompter;

#[derive(Debug, Parser)]
#[command(name = "respin")]
#[command(about = "Respin - article spin and version tracking", long_about = None)]
struct Cli {
    /// Emit JSON structured logs instead of human-readable output
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the interactive fetch, spin, edit, diff workflow
    Run(commands::run::RunArgs),
    /// Fetch a URL and print the extracted article text
    Fetch(commands::fetch::FetchArgs),
}

fn main() {
    let cli = Cli::parse();

    logging::init(if cli.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = match cli.command {
        Commands::Run(args) => commands::run::execute(args),
        Commands::Fetch(args) => commands::fetch::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
