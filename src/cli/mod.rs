//! Command-line surfaces.

mod keypad;
mod menu;

pub use keypad::Keypad;
pub use menu::{Menu, MenuOption};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Arithmetic and scientific calculator.
#[derive(Debug, Parser)]
#[command(name = "zcalc", version, about)]
pub struct Cli {
    /// Path to the config file (defaults to the user config directory).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log state transitions to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Numbered menu of operations (default).
    Menu,
    /// Interactive keypad with memory, history and scientific functions.
    Keypad,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["zcalc"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_keypad_with_config() {
        let cli = Cli::try_parse_from(["zcalc", "keypad", "--config", "/tmp/c.toml", "-v"])
            .unwrap();
        assert_eq!(cli.command, Some(Command::Keypad));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert!(cli.verbose);
    }
}
