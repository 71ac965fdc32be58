//! VetCheck CLI
//!
//! Interactive console for veterinary check-ins

use clap::Parser;
use std::io;
use std::sync::Arc;
use vetcheck_core::logging_facility;
use vetcheck_core::{ExError, TracingDiagnostics};
use vetcheck_store::CheckupStore;

mod commands;
mod config;

use commands::menu::Console;
use config::Cli;

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile.into());

    if let Err(e) = run(&cli) {
        tracing::error!(code = e.code(), "{}", e);
        eprintln!("Error: {}", e);
        eprintln!("An unexpected error occurred. Please contact support.");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ExError> {
    let store = CheckupStore::initialize(cli.store_config(), Arc::new(TracingDiagnostics))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(&store, stdin.lock(), stdout.lock());
    console.run(chrono::Local::now().date_naive())
}
