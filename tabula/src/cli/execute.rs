use clap::Args;

use crate::{cli::Error, command::Dispatcher, sink::WriterSink};

#[derive(Args, Clone)]
pub struct ExecuteCommand {
    #[arg(
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Command line to run, e.g. `print users`"
    )]
    pub command: Vec<String>,
}

impl ExecuteCommand {
    pub fn run(self, dispatcher: &Dispatcher) -> Result<(), Error> {
        let command = self.command.join(" ");
        tracing::debug!("Executing `{command}`");
        let mut stdout = WriterSink::new(std::io::stdout().lock());
        dispatcher.dispatch(&command, &mut stdout)?;
        Ok(())
    }
}
