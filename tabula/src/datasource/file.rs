use std::path::{Path, PathBuf};

use snafu::ResultExt;

use crate::{
    datasource::{
        DataFile, DataSource, MemoryDataSource, TableSummary,
        error::{
            Error, ParseJsonDataFileSnafu, ParseYamlDataFileSnafu, ReadDataFileSnafu,
            UnsupportedDataFileFormatSnafu,
        },
    },
    table::DataSet,
};

/// Encoding of a data file, chosen by its extension.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DataFileFormat {
    Yaml,
    Json,
}

impl DataFileFormat {
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDataFileFormat`] for any extension other
    /// than `yaml`, `yml` or `json`.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        match path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase).as_deref()
        {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => UnsupportedDataFileFormatSnafu { filename: path.to_path_buf() }.fail(),
        }
    }
}

/// Tables stored in a YAML or JSON file.
///
/// The file is read again on every call, so edits show up without restarting
/// an interactive session, and a file that disappears surfaces as an error
/// from the call that needed it.
#[derive(Clone, Debug)]
pub struct FileDataSource {
    path: PathBuf,
    format: DataFileFormat,
}

impl FileDataSource {
    /// # Errors
    ///
    /// Returns an error if the extension of `path` is not supported.
    pub fn new<P: Into<PathBuf>>(path: P) -> Result<Self, Error> {
        let path = path.into();
        let format = DataFileFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    fn load(&self) -> Result<MemoryDataSource, Error> {
        tracing::debug!("Loading data file {}", self.path.display());
        let data =
            std::fs::read(&self.path).context(ReadDataFileSnafu { filename: self.path.clone() })?;
        let DataFile { tables } = match self.format {
            DataFileFormat::Yaml => serde_yaml::from_slice(&data)
                .context(ParseYamlDataFileSnafu { filename: self.path.clone() })?,
            DataFileFormat::Json => serde_json::from_slice(&data)
                .context(ParseJsonDataFileSnafu { filename: self.path.clone() })?,
        };
        MemoryDataSource::new(tables)
    }
}

impl DataSource for FileDataSource {
    fn fetch_rows(&self, table_name: &str) -> Result<Vec<DataSet>, Error> {
        self.load()?.fetch_rows(table_name)
    }

    fn table_summaries(&self) -> Result<Vec<TableSummary>, Error> { self.load()?.table_summaries() }
}
