//! The `tabula` command-line interface.
//!
//! # Examples
//!
//! ```bash
//! # Print one table
//! tabula print users
//!
//! # Run a raw command line, exactly as the interactive shell would
//! tabula execute print users
//!
//! # List the tables of the configured data source
//! tabula tables
//!
//! # Read commands from stdin, one per line
//! tabula shell
//! ```

pub mod error;
mod execute;
mod print;
mod shell;
mod tables;

use std::{io::Write, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use snafu::ResultExt;
use tabula_base::CLI_PROGRAM_NAME;
use tokio::runtime::Runtime;

pub use self::error::Error;
use self::{execute::ExecuteCommand, print::PrintCommand, shell::ShellCommand};
use crate::{command::Dispatcher, config::Config, shadow};

/// Entry point of the `tabula` binary.
#[derive(Parser)]
#[command(
    name = CLI_PROGRAM_NAME,
    author,
    version,
    long_version = shadow::CLAP_LONG_VERSION,
    about = "Tabula: print named tables as box-drawn terminal tables.",
    long_about = "Tabula prints tables from a YAML or JSON data source as fixed-width, \
                  box-drawn tables. Tables are addressed with the `print <table>` command, \
                  either directly from the command line or from an interactive shell.",
    color = clap::ColorChoice::Auto
)]
pub struct Cli {
    #[clap(subcommand)]
    commands: Option<Commands>,

    #[clap(
        long = "config",
        short = 'c',
        env = "TABULA_CONFIG_FILE_PATH",
        help = "Specify a configuration file. Defaults to ~/.config/tabula/config.yaml or \
                TABULA_CONFIG_FILE_PATH env var."
    )]
    config_file: Option<PathBuf>,

    #[clap(
        long = "data",
        short = 'd',
        env = "TABULA_DATA_FILE",
        help = "Read tables from this YAML or JSON file instead of the configured data source."
    )]
    data_file: Option<PathBuf>,

    #[clap(
        long = "log-level",
        env = "TABULA_LOG_LEVEL",
        help = "Set the logging level (e.g., warn, info, debug, trace)."
    )]
    log_level: Option<tracing::Level>,
}

#[derive(Clone, Subcommand)]
pub enum Commands {
    #[command(about = "Display version information")]
    Version,

    #[command(about = "Generate shell completion script for the specified shell (bash, zsh, fish)")]
    Completions { shell: clap_complete::Shell },

    #[command(about = "Output an example configuration in YAML format")]
    DefaultConfig,

    #[command(alias = "p", about = "Print a table")]
    Print(PrintCommand),

    #[command(aliases = ["e", "exec"], about = "Run one command line, e.g. `print users`")]
    Execute(ExecuteCommand),

    #[command(aliases = ["t", "ls"], about = "List the tables of the data source")]
    Tables,

    #[command(alias = "s", about = "Read commands from stdin, one per line")]
    Shell(ShellCommand),
}

impl Default for Cli {
    fn default() -> Self { Self::parse() }
}

impl Cli {
    /// Loads the configuration and applies the command-line overrides.
    ///
    /// An explicitly given configuration file must exist. When searching the
    /// default locations, a missing file means the built-in defaults.
    fn load_config(&self) -> Result<Config, Error> {
        let mut config = match &self.config_file {
            Some(path) => Config::load(path)?,
            None => {
                let path = Config::search_config_file_path();
                if path.is_file() { Config::load(path)? } else { Config::default() }
            }
        };

        if let Some(log_level) = self.log_level {
            config.log.level = log_level;
        }
        if let Some(data_file) = &self.data_file {
            config.data_file = Some(data_file.clone());
        }

        Ok(config)
    }

    /// Runs the selected subcommand and returns the process exit code.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded, the runtime
    /// cannot start, or the subcommand fails.
    pub fn run(self) -> Result<i32, Error> {
        match self.commands {
            Some(Commands::Version) => {
                std::io::stdout()
                    .write_all(Self::command().render_long_version().as_bytes())
                    .context(error::WriteStdoutSnafu)?;
                return Ok(0);
            }
            Some(Commands::Completions { shell }) => {
                let mut app = Self::command();
                let bin_name = app.get_name().to_string();
                clap_complete::generate(shell, &mut app, bin_name, &mut std::io::stdout());
                return Ok(0);
            }
            Some(Commands::DefaultConfig) => {
                std::io::stdout()
                    .write_all(Config::template_basic())
                    .context(error::WriteStdoutSnafu)?;
                return Ok(0);
            }
            None => {
                let help = Self::command().render_long_help().ansi().to_string();
                std::io::stderr().write_all(help.as_bytes()).context(error::WriteStderrSnafu)?;
                return Ok(-1);
            }
            _ => {}
        }

        let config = self.load_config()?;
        config.log.registry();
        let dispatcher = Dispatcher::with_builtin_commands(config.data_source()?);

        match self.commands {
            Some(Commands::Print(cmd)) => cmd.run(&dispatcher)?,
            Some(Commands::Execute(cmd)) => cmd.run(&dispatcher)?,
            Some(Commands::Tables) => tables::run(&dispatcher)?,
            Some(Commands::Shell(cmd)) => {
                return Runtime::new()
                    .context(error::InitializeTokioRuntimeSnafu)?
                    .block_on(cmd.run(&dispatcher));
            }
            Some(Commands::Version | Commands::Completions { .. } | Commands::DefaultConfig)
            | None => {}
        }

        Ok(0)
    }
}
