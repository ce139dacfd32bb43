mod cli;
mod config;
mod error;
mod solve;

use clap::Parser;
use cli::{Cli, Command};
use error::CliError;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<u8, CliError> {
    let presets = config::load_presets(cli.presets.as_deref())?;
    let mut stdout = io::stdout().lock();

    let code = match &cli.command {
        Command::Solve(args) => {
            let outcome = solve::solve(args, &presets)?;
            solve::render_outcome(&mut stdout, &outcome, cli.format)?;
            outcome.exit_code()
        }
        Command::Presets => {
            solve::render_presets(&mut stdout, &presets, cli.format)?;
            0
        }
    };

    stdout.flush()?;
    Ok(code)
}
