use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;
use zcalc::cli::{Cli, Command, Keypad, Menu};
use zcalc::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    tracing::info!(?config, "starting");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => Menu::new(stdin, stdout).run(),
        Command::Keypad => Keypad::new(stdin, stdout, &config).run(),
    }
}

/// Log to stderr so output never interleaves with the calculator on stdout.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
