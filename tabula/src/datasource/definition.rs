use serde::{Deserialize, Serialize};

use crate::{
    datasource::{
        TableSummary,
        error::{Error, RowLengthMismatchSnafu},
    },
    table::{DataSet, Value},
};

/// A table as written in a configuration or data file.
///
/// ```yaml
/// name: users
/// columns: [id, name]
/// rows:
///   - [1, Ada]
///   - [2, Grace]
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDefinition {
    pub name: String,

    #[serde(default)]
    pub columns: Vec<String>,

    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
}

impl TableDefinition {
    /// Builds one [`DataSet`] per row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowLengthMismatch`] if a row does not have exactly one
    /// value per column.
    pub fn to_data_sets(&self) -> Result<Vec<DataSet>, Error> {
        self.rows
            .iter()
            .enumerate()
            .map(|(row_index, values)| {
                if values.len() != self.columns.len() {
                    return RowLengthMismatchSnafu {
                        table_name: self.name.clone(),
                        row_index,
                        expected: self.columns.len(),
                        actual: values.len(),
                    }
                    .fail();
                }
                Ok(self.columns.iter().cloned().zip(values.iter().cloned()).collect())
            })
            .collect()
    }

    #[must_use]
    pub fn summary(&self) -> TableSummary {
        TableSummary {
            name: self.name.clone(),
            column_count: self.columns.len(),
            row_count: self.rows.len(),
        }
    }
}

/// Top-level layout of a data file.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataFile {
    #[serde(default)]
    pub tables: Vec<TableDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_data_sets() {
        let definition: TableDefinition =
            serde_yaml::from_str("name: users\ncolumns: [id, name]\nrows:\n  - [1, Ada]\n")
                .expect("definition should parse");
        let rows = definition.to_data_sets().expect("rows should be valid");
        assert_eq!(rows, vec![DataSet::new().with("id", 1_i64).with("name", "Ada")]);
    }

    #[test]
    fn test_to_data_sets_rejects_ragged_row() {
        let definition = TableDefinition {
            name: "users".to_string(),
            columns: vec!["id".to_string(), "name".to_string()],
            rows: vec![vec![Value::Integer(1), Value::from("Ada")], vec![Value::Integer(2)]],
        };
        let err = definition.to_data_sets().unwrap_err();
        assert!(matches!(
            err,
            Error::RowLengthMismatch { row_index: 1, expected: 2, actual: 1, .. }
        ));
        assert_eq!(
            err.to_string(),
            "Row 1 of table 'users' has 1 values, but the table has 2 columns"
        );
    }

    #[test]
    fn test_summary() {
        let definition = TableDefinition {
            name: "empty".to_string(),
            columns: vec!["a".to_string()],
            rows: Vec::new(),
        };
        assert_eq!(definition.summary(), TableSummary {
            name: "empty".to_string(),
            column_count: 1,
            row_count: 0,
        });
    }
}
