use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod domain;
mod error;
mod git;
mod resolver;
mod roster;
mod trailer;

use cli::Cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = cli::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}
