use snafu::ResultExt;
use tabula_base::consts::TABLES_COMMAND;

use crate::{
    command::{
        Command,
        error::{self, Error},
    },
    datasource::DataSource,
    sink::OutputSink,
    ui::table::TableSummaryExt,
};

/// Lists the tables of a data source: `tables`.
#[derive(Clone, Debug)]
pub struct Tables<D> {
    data_source: D,
}

impl<D> Tables<D> {
    #[must_use]
    pub const fn new(data_source: D) -> Self { Self { data_source } }
}

impl<D> Command for Tables<D>
where
    D: DataSource,
{
    fn can_handle(&self, command: &str) -> bool { command.trim().eq_ignore_ascii_case(TABLES_COMMAND) }

    fn handle(&self, _command: &str, sink: &mut dyn OutputSink) -> Result<(), Error> {
        let summaries = self.data_source.table_summaries().context(error::DataSourceSnafu)?;
        tracing::info!("Listing {} table(s)", summaries.len());
        let mut text = summaries.render_table();
        text.push('\n');
        sink.write(&text).context(error::OutputSnafu)
    }
}
