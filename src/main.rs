//! PCR Master Mix Calculator
//!
//! Prints DDW, master mix and primer volumes for a batch of PCR reactions.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pcrmix::build_info;
use pcrmix::cli::{self, Args};

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pcrmix=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if args.banner {
        build_info::print_startup_banner();
    }

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    match cli::run(&args, &mut input, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Exiting after error: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
