use snafu::{ResultExt, ensure};
use tabula_base::consts::PRINT_COMMAND;

use crate::{
    command::{
        Command,
        error::{self, Error},
    },
    datasource::DataSource,
    sink::OutputSink,
    ui::table::TableRenderer,
};

const EXPECTED_PARAMETERS: usize = 1;

/// A parsed `print <table>` command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrintRequest {
    pub table_name: String,
}

impl PrintRequest {
    /// Parses a `print <table>` line split on whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncorrectNumberOfParameters`] unless the line holds
    /// exactly the keyword and one table name.
    pub fn parse(command: &str) -> Result<Self, Error> {
        let tokens = command.split_whitespace().collect::<Vec<_>>();
        ensure!(
            tokens.len() == EXPECTED_PARAMETERS + 1,
            error::IncorrectNumberOfParametersSnafu {
                expected: EXPECTED_PARAMETERS,
                actual: tokens.len().saturating_sub(1),
            }
        );
        Ok(Self { table_name: tokens[1].to_string() })
    }
}

/// Prints one table: `print <table>`.
#[derive(Clone, Debug)]
pub struct Print<D> {
    data_source: D,
}

impl<D> Print<D> {
    #[must_use]
    pub const fn new(data_source: D) -> Self { Self { data_source } }
}

impl<D> Command for Print<D>
where
    D: DataSource,
{
    fn can_handle(&self, command: &str) -> bool {
        command
            .get(..=PRINT_COMMAND.len())
            .and_then(|head| head.strip_suffix(' '))
            .is_some_and(|keyword| keyword.eq_ignore_ascii_case(PRINT_COMMAND))
    }

    fn handle(&self, command: &str, sink: &mut dyn OutputSink) -> Result<(), Error> {
        let PrintRequest { table_name } = PrintRequest::parse(command)?;
        let rows = self.data_source.fetch_rows(&table_name).context(error::DataSourceSnafu)?;
        tracing::info!("Printing table '{table_name}' with {} row(s)", rows.len());
        sink.write(&TableRenderer::render(&table_name, &rows)).context(error::OutputSnafu)
    }
}
