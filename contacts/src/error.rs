use std::path::PathBuf;

use tally_types::ContactId;
use thiserror::Error;

pub type Result<T, E = ContactError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ContactError {
    /// Update or delete was called with a record the store never assigned an id to.
    #[error("cannot {operation} a contact that has no id (not yet saved)")]
    MissingId { operation: &'static str },
    #[error("contact with id {0} not found")]
    NotFound(ContactId),
    #[error("failed to prepare database path {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}
