//! bomdesk CLI
//!
//! Interactive console for product, material and consumption records

use bomdesk_core::logging_facility;
use bomdesk_engine::Orchestrator;
use bomdesk_store::Database;
use clap::Parser;
use std::io;
use std::path::PathBuf;

mod settings;
mod terminal;

#[derive(Debug, Parser)]
#[command(name = "bomdesk")]
#[command(about = "bomdesk - product, material and consumption records", long_about = None)]
struct Cli {
    /// Configuration file (TOML); defaults to ./bomdesk.toml when present
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// SQLite database file
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Emit JSON logs on stderr
    #[arg(long)]
    json_logs: bool,

    /// Do not create missing tables on startup
    #[arg(long)]
    no_provision: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let overrides = settings::Overrides {
        config_file: cli.config,
        db: cli.db,
        json_logs: cli.json_logs,
        no_provision: cli.no_provision,
    };
    let config = settings::load(&overrides)?;
    logging_facility::init(config.logging.profile);

    let db = Database::connect(&config.database)?;
    let stdin = io::stdin();
    let mut prompter = terminal::TerminalPrompter::new(stdin.lock(), io::stdout());

    let summary = Orchestrator::new(db, config.generator).run(&mut prompter)?;
    tracing::debug!(exit = ?summary.exit, "bye");
    Ok(())
}
