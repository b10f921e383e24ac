//! Opening the contacts database file.

use std::fs::OpenOptions;
use std::path::Path;

use rusqlite::Connection;

use crate::error::{ContactError, Result};

/// Open a SQLite database at `path`, creating the parent directory and an
/// owner-only database file (Unix: 0o600) when they don't exist yet.
pub(crate) fn open_db(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|source| ContactError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    if !path.exists() {
        create_db_file(path)?;
    }

    Ok(Connection::open(path)?)
}

fn create_db_file(path: &Path) -> Result<()> {
    let mut options = OpenOptions::new();
    options.create(true).truncate(false).read(true).write(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options
        .open(path)
        .map(drop)
        .map_err(|source| ContactError::Io {
            path: path.to_path_buf(),
            source,
        })
}
