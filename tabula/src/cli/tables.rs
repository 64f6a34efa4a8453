use tabula_base::consts::TABLES_COMMAND;

use crate::{cli::Error, command::Dispatcher, sink::WriterSink};

pub fn run(dispatcher: &Dispatcher) -> Result<(), Error> {
    let mut stdout = WriterSink::new(std::io::stdout().lock());
    dispatcher.dispatch(TABLES_COMMAND, &mut stdout)?;
    Ok(())
}
