use std::io::IsTerminal;

use clap::Args;
use snafu::ResultExt;
use tabula_base::consts::{DEFAULT_SHELL_PROMPT, SHELL_EXIT_COMMANDS};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::{
    cli::error::{self, Error},
    command::Dispatcher,
};

#[derive(Args, Clone)]
pub struct ShellCommand {
    #[arg(long, help = "Prompt shown before each command when stdin is a terminal")]
    pub prompt: Option<String>,
}

impl ShellCommand {
    /// Reads commands from stdin until end of input or an exit command.
    ///
    /// A failing command is reported on stderr and the shell keeps reading.
    /// The exit code is `1` if any command failed.
    pub async fn run(self, dispatcher: &Dispatcher) -> Result<i32, Error> {
        let prompt = if std::io::stdin().is_terminal() {
            Some(self.prompt.unwrap_or_else(|| DEFAULT_SHELL_PROMPT.to_string()))
        } else {
            None
        };

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut failed = false;
        loop {
            if let Some(prompt) = &prompt {
                write_stdout(prompt).await?;
            }

            let Some(line) = lines.next_line().await.context(error::ReadStdinSnafu)? else {
                break;
            };
            let command = match ShellInput::from_line(&line) {
                ShellInput::Blank => continue,
                ShellInput::Exit => break,
                ShellInput::Command(command) => command,
            };

            match dispatch_to_string(dispatcher, command) {
                Ok(output) => write_stdout(&output).await?,
                Err(err) => {
                    failed = true;
                    tracing::warn!("Command `{line}` failed: {err}");
                    write_stderr(&format!("Error: {err}\n")).await?;
                }
            }
        }

        Ok(i32::from(failed))
    }
}

/// One line read by the shell.
#[derive(Debug, Eq, PartialEq)]
enum ShellInput<'a> {
    Blank,
    Exit,
    Command(&'a str),
}

impl<'a> ShellInput<'a> {
    /// Whitespace only decides whether a line is blank or an exit command;
    /// a command is dispatched exactly as typed.
    fn from_line(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            Self::Blank
        } else if SHELL_EXIT_COMMANDS.iter().any(|exit| trimmed.eq_ignore_ascii_case(exit)) {
            Self::Exit
        } else {
            Self::Command(line)
        }
    }
}

/// Runs one command line and returns everything it printed.
fn dispatch_to_string(dispatcher: &Dispatcher, command: &str) -> Result<String, Error> {
    let mut output = String::new();
    dispatcher.dispatch(command, &mut output)?;
    Ok(output)
}

async fn write_stdout(text: &str) -> Result<(), Error> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(text.as_bytes()).await.context(error::WriteStdoutSnafu)?;
    stdout.flush().await.context(error::WriteStdoutSnafu)
}

async fn write_stderr(text: &str) -> Result<(), Error> {
    let mut stderr = tokio::io::stderr();
    stderr.write_all(text.as_bytes()).await.context(error::WriteStderrSnafu)?;
    stderr.flush().await.context(error::WriteStderrSnafu)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::datasource::MemoryDataSource;

    #[test]
    fn test_shell_input_from_line() {
        assert_eq!(ShellInput::from_line(""), ShellInput::Blank);
        assert_eq!(ShellInput::from_line(" \t "), ShellInput::Blank);
        assert_eq!(ShellInput::from_line("exit"), ShellInput::Exit);
        assert_eq!(ShellInput::from_line("  QUIT "), ShellInput::Exit);
        assert_eq!(ShellInput::from_line("print users"), ShellInput::Command("print users"));
    }

    #[test]
    fn test_shell_input_keeps_command_untrimmed() {
        assert_eq!(ShellInput::from_line("print "), ShellInput::Command("print "));
        assert_eq!(ShellInput::from_line("  print users"), ShellInput::Command("  print users"));
    }

    #[test]
    fn test_dispatch_to_string() {
        let data_source =
            MemoryDataSource::new(Vec::new()).expect("empty data source should be valid");
        let dispatcher = Dispatcher::with_builtin_commands(Arc::new(data_source));
        let output = dispatch_to_string(&dispatcher, "print nothing").expect("print should succeed");
        assert!(output.contains("Table 'nothing' is empty or does not exist"));

        let err = dispatch_to_string(&dispatcher, "print ").unwrap_err();
        assert_eq!(err.to_string(), "Incorrect number of parameters. Expected 1, but is 0");

        let err = dispatch_to_string(&dispatcher, "drop nothing").unwrap_err();
        assert_eq!(err.to_string(), "Command 'drop nothing' is not supported");
    }
}
