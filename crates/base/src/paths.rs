use std::path::PathBuf;

use directories::ProjectDirs;

use crate::{DATA_FILE_NAME, PROJECT_NAME};

/// Location of the data file used when the configuration does not name one.
///
/// Resolves to `<data dir>/tabula/tables.yaml`, or `None` when no home
/// directory can be determined.
#[inline]
#[must_use]
pub fn default_data_file() -> Option<PathBuf> {
    ProjectDirs::from("", PROJECT_NAME, PROJECT_NAME)
        .map(|dirs| [dirs.data_dir().to_path_buf(), PathBuf::from(DATA_FILE_NAME)].into_iter().collect())
}
