use crate::{
    datasource::{
        DataSource, TableDefinition, TableSummary,
        error::{DuplicateTableSnafu, Error},
    },
    table::DataSet,
};

/// Tables held in memory, validated once when the source is built.
#[derive(Clone, Debug, Default)]
pub struct MemoryDataSource {
    tables: Vec<(TableSummary, Vec<DataSet>)>,
}

impl MemoryDataSource {
    /// Builds a source from table definitions.
    ///
    /// # Errors
    ///
    /// Returns an error if two tables share a name or a row does not match
    /// its table's columns.
    pub fn new<I>(definitions: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = TableDefinition>,
    {
        let mut tables: Vec<(TableSummary, Vec<DataSet>)> = Vec::new();
        for definition in definitions {
            if tables.iter().any(|(summary, _)| summary.name == definition.name) {
                return DuplicateTableSnafu { table_name: definition.name }.fail();
            }
            let rows = definition.to_data_sets()?;
            tables.push((definition.summary(), rows));
        }
        Ok(Self { tables })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize { self.tables.len() }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool { self.tables.is_empty() }
}

impl DataSource for MemoryDataSource {
    fn fetch_rows(&self, table_name: &str) -> Result<Vec<DataSet>, Error> {
        let rows = self
            .tables
            .iter()
            .find(|(summary, _)| summary.name == table_name)
            .map(|(_, rows)| rows.clone())
            .unwrap_or_default();
        tracing::debug!("Fetched {} row(s) of table '{table_name}'", rows.len());
        Ok(rows)
    }

    fn table_summaries(&self) -> Result<Vec<TableSummary>, Error> {
        Ok(self.tables.iter().map(|(summary, _)| summary.clone()).collect())
    }
}
