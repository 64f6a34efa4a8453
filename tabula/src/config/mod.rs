//! The YAML configuration file.
//!
//! Looked up at `~/.config/tabula/config.yaml` (platform config directory),
//! then `~/.config/tabula/` and `~/.tabula/`, unless a path is given on the
//! command line.

mod error;

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use tabula_cli::config::LogConfig;

pub use self::error::Error;
use crate::datasource::{DataSource, FileDataSource, MemoryDataSource, TableDefinition};

const TEMPLATE_BASIC: &str = include_str!("template.yaml");

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// YAML or JSON file holding the tables; takes precedence over `tables`.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    #[serde(default = "Vec::new")]
    pub tables: Vec<TableDefinition>,

    #[serde(default = "LogConfig::default")]
    pub log: LogConfig,
}

impl Config {
    #[must_use]
    pub fn search_config_file_path() -> PathBuf {
        let paths = vec![Self::default_path()]
            .into_iter()
            .chain(tabula_base::fallback_project_config_directories().into_iter().map(|mut path| {
                path.push(tabula_base::CLI_CONFIG_NAME);
                path
            }))
            .collect::<Vec<_>>();
        for path in paths {
            let Ok(exists) = path.try_exists() else {
                continue;
            };
            if exists {
                return path;
            }
        }
        Self::default_path()
    }

    #[inline]
    #[must_use]
    pub fn default_path() -> PathBuf {
        [tabula_base::PROJECT_CONFIG_DIR.to_path_buf(), PathBuf::from(tabula_base::CLI_CONFIG_NAME)]
            .into_iter()
            .collect()
    }

    /// The commented example configuration printed by `default-config`.
    #[inline]
    #[must_use]
    pub const fn template_basic() -> &'static [u8] { TEMPLATE_BASIC.as_bytes() }

    /// Reads the configuration at `path`, resolving `~` and relative paths in
    /// the file itself as well as in `dataFile` and `log.filePath`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut config: Self = {
            let path = resolve(path.as_ref())?;
            let data =
                std::fs::read(&path).context(error::OpenConfigSnafu { filename: path.clone() })?;
            serde_yaml::from_slice(&data).context(error::ParseConfigSnafu { filename: path })?
        };

        config.data_file = config.data_file.as_deref().map(resolve).transpose()?;
        config.log.file_path = config.log.file_path.as_deref().map(resolve).transpose()?;

        Ok(config)
    }

    /// Builds the data source described by this configuration.
    ///
    /// `dataFile` wins over inline `tables`; with neither, the default data
    /// file is used if it exists, otherwise there are no tables at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the data file has an unsupported extension, or the
    /// inline tables are invalid.
    pub fn data_source(&self) -> Result<Arc<dyn DataSource>, Error> {
        if let Some(data_file) = &self.data_file {
            if !self.tables.is_empty() {
                tracing::warn!(
                    "Both `dataFile` and `tables` are configured, ignoring {} inline table(s)",
                    self.tables.len()
                );
            }
            let source = FileDataSource::new(data_file).context(error::BuildDataSourceSnafu)?;
            return Ok(Arc::new(source));
        }

        let default_data_file = if self.tables.is_empty() {
            tabula_base::paths::default_data_file().filter(|path| path.is_file())
        } else {
            None
        };
        if let Some(path) = default_data_file {
            tracing::debug!("Using default data file {}", path.display());
            let source = FileDataSource::new(path).context(error::BuildDataSourceSnafu)?;
            return Ok(Arc::new(source));
        }

        let source =
            MemoryDataSource::new(self.tables.iter().cloned()).context(error::BuildDataSourceSnafu)?;
        Ok(Arc::new(source))
    }
}

fn resolve(path: &Path) -> Result<PathBuf, Error> {
    path.try_resolve()
        .map(|path| path.to_path_buf())
        .with_context(|_| error::ResolveFilePathSnafu { file_path: path.to_path_buf() })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::table::Value;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("temporary file should be created");
        file.write_all(content.as_bytes()).expect("temporary file should be written");
        file
    }

    #[test]
    fn test_template_is_valid() {
        let config: Config =
            serde_yaml::from_slice(Config::template_basic()).expect("template should parse");
        assert!(config.data_file.is_none());
        assert_eq!(config.tables.len(), 2);
        assert_eq!(config.log.level, tracing::Level::WARN);

        let source = config.data_source().expect("template tables should be valid");
        let rows = source.fetch_rows("users").expect("fetch should succeed");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("name"), Some(&Value::from("Ada Lovelace")));
        assert!(source.fetch_rows("empty").expect("fetch should succeed").is_empty());
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let file = write_config("{}\n");
        let config = Config::load(file.path()).expect("config should load");
        assert!(config.data_file.is_none());
        assert!(config.tables.is_empty());
        assert!(config.log.emit_stderr);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("temporary directory should be created");
        let err = Config::load(dir.path().join("config.yaml")).unwrap_err();
        assert!(matches!(err, Error::OpenConfig { .. }));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let file = write_config("tables: {name: [\n");
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::ParseConfig { .. }));
    }

    #[test]
    fn test_data_file_takes_precedence() {
        let dir = tempfile::tempdir().expect("temporary directory should be created");
        let data_file = dir.path().join("tables.json");
        std::fs::write(&data_file, r#"{"tables": [{"name": "t", "columns": ["c"], "rows": [["from file"]]}]}"#)
            .expect("data file should be written");
        let file = write_config(&format!(
            "dataFile: {}\ntables:\n  - name: t\n    columns: [c]\n    rows: [[inline]]\n",
            data_file.display()
        ));

        let config = Config::load(file.path()).expect("config should load");
        assert_eq!(config.data_file.as_deref(), Some(data_file.as_path()));
        let rows = config
            .data_source()
            .expect("data source should build")
            .fetch_rows("t")
            .expect("fetch should succeed");
        assert_eq!(rows[0].values(), [Value::from("from file")]);
    }

    #[test]
    fn test_invalid_inline_tables() {
        let config = Config {
            tables: vec![TableDefinition {
                name: "t".to_string(),
                columns: vec!["a".to_string(), "b".to_string()],
                rows: vec![vec![Value::Integer(1)]],
            }],
            ..Config::default()
        };
        assert!(matches!(config.data_source(), Err(Error::BuildDataSource { .. })));
    }
}
