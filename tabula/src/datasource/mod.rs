//! Sources of table rows.
//!
//! A [`DataSource`] resolves a table name to its rows. A missing table is not
//! an error: it resolves to no rows, and the renderer prints the empty-table
//! box for it. Errors are reserved for a source that cannot be read at all.

mod definition;
mod error;
mod file;
mod memory;

pub use self::{
    definition::{DataFile, TableDefinition},
    error::Error,
    file::{DataFileFormat, FileDataSource},
    memory::MemoryDataSource,
};
use std::sync::Arc;

use crate::table::DataSet;

/// Name and dimensions of one table known to a data source.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableSummary {
    pub name: String,
    pub column_count: usize,
    pub row_count: usize,
}

pub trait DataSource: Send + Sync {
    /// Returns the rows of `table_name`, or no rows when the table is empty
    /// or does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying storage cannot be read.
    fn fetch_rows(&self, table_name: &str) -> Result<Vec<DataSet>, Error>;

    /// Lists the tables this source knows about, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying storage cannot be read.
    fn table_summaries(&self) -> Result<Vec<TableSummary>, Error>;
}

impl<T> DataSource for Arc<T>
where
    T: DataSource + ?Sized,
{
    fn fetch_rows(&self, table_name: &str) -> Result<Vec<DataSet>, Error> {
        (**self).fetch_rows(table_name)
    }

    fn table_summaries(&self) -> Result<Vec<TableSummary>, Error> { (**self).table_summaries() }
}
