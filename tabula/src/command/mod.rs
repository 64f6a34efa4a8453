//! Textual commands and their routing.
//!
//! A [`Command`] recognizes the lines it is responsible for and writes its
//! result to an [`OutputSink`]. The [`Dispatcher`] offers a line to each
//! registered command in order and runs the first one that accepts it.

mod error;
mod print;
mod tables;

use std::sync::Arc;

use snafu::OptionExt;

pub use self::{
    error::Error,
    print::{Print, PrintRequest},
    tables::Tables,
};
use crate::{datasource::DataSource, sink::OutputSink};

pub trait Command: Send + Sync {
    /// Returns `true` if this command is responsible for `command`.
    fn can_handle(&self, command: &str) -> bool;

    /// Runs `command`, writing its output to `sink`.
    ///
    /// Nothing is written when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is malformed, its data cannot be
    /// fetched, or the output cannot be written.
    fn handle(&self, command: &str, sink: &mut dyn OutputSink) -> Result<(), Error>;
}

/// Routes command lines to the first registered [`Command`] that accepts
/// them.
#[derive(Default)]
pub struct Dispatcher {
    commands: Vec<Box<dyn Command>>,
}

impl Dispatcher {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Registers the built-in commands, all reading from `data_source`.
    #[must_use]
    pub fn with_builtin_commands(data_source: Arc<dyn DataSource>) -> Self {
        Self::new()
            .with_command(Print::new(Arc::clone(&data_source)))
            .with_command(Tables::new(data_source))
    }

    #[must_use]
    pub fn with_command<C>(mut self, command: C) -> Self
    where
        C: Command + 'static,
    {
        self.commands.push(Box::new(command));
        self
    }

    /// Runs the first command accepting `command`.
    ///
    /// Only a trailing line terminator is stripped; everything else reaches
    /// the command as typed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCommand`] if no command accepts the line, or
    /// the error of the command that ran.
    pub fn dispatch(&self, command: &str, sink: &mut dyn OutputSink) -> Result<(), Error> {
        let command = command.trim_end_matches(['\r', '\n']);
        let handler = self
            .commands
            .iter()
            .find(|handler| handler.can_handle(command))
            .context(error::UnknownCommandSnafu { command })?;
        tracing::debug!("Dispatching command '{command}'");
        handler.handle(command, sink)
    }
}
