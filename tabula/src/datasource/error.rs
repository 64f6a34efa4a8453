use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to read data file {}, error: {source}", filename.display()))]
    ReadDataFile { filename: PathBuf, source: std::io::Error },

    #[snafu(display("Failed to parse YAML data file {}, error: {source}", filename.display()))]
    ParseYamlDataFile { filename: PathBuf, source: serde_yaml::Error },

    #[snafu(display("Failed to parse JSON data file {}, error: {source}", filename.display()))]
    ParseJsonDataFile { filename: PathBuf, source: serde_json::Error },

    #[snafu(display(
        "Data file {} has an unsupported extension, expected .yaml, .yml or .json",
        filename.display()
    ))]
    UnsupportedDataFileFormat { filename: PathBuf },

    #[snafu(display(
        "Row {row_index} of table '{table_name}' has {actual} values, but the table has \
         {expected} columns"
    ))]
    RowLengthMismatch { table_name: String, row_index: usize, expected: usize, actual: usize },

    #[snafu(display("Table '{table_name}' is defined more than once"))]
    DuplicateTable { table_name: String },
}
