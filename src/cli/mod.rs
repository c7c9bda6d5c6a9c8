//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod preview;
pub mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Exchange Robot - broadcast exchange rates to Telegram chats.
#[derive(Parser, Debug)]
#[command(name = "exchange-robot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the bot (foreground)
    Run(RunArgs),

    /// Fetch the state once and print the rates message
    Preview(ConfigPathArg),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `exchange-robot check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_overrides() {
        let cli = Cli::parse_from([
            "exchange-robot",
            "run",
            "--config",
            "bot.toml",
            "--log-level",
            "debug",
            "--json-logs",
        ]);

        let Commands::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.config, PathBuf::from("bot.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.json_logs);
    }

    #[test]
    fn config_path_defaults() {
        let cli = Cli::parse_from(["exchange-robot", "check", "config"]);

        let Commands::Check(CheckCommand::Config(arg)) = cli.command else {
            panic!("expected check config command");
        };
        assert_eq!(arg.config, PathBuf::from("config.toml"));
    }
}
