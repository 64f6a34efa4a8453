use clap::Args;
use tabula_base::consts::PRINT_COMMAND;

use crate::{cli::Error, command::Dispatcher, sink::WriterSink};

#[derive(Args, Clone)]
pub struct PrintCommand {
    #[arg(help = "Name of the table to print")]
    pub table_name: String,
}

impl PrintCommand {
    pub fn run(self, dispatcher: &Dispatcher) -> Result<(), Error> {
        let Self { table_name } = self;
        let mut stdout = WriterSink::new(std::io::stdout().lock());
        dispatcher.dispatch(&format!("{PRINT_COMMAND} {table_name}"), &mut stdout)?;
        Ok(())
    }
}
