use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while building a catalog or reading a date from user input.
///
/// A date without a wallpaper is not an error; lookups return `None` for it.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("more than one wallpaper is dated {0}")]
    DuplicateDate(NaiveDate),

    #[error("more than one wallpaper has id {0:?}")]
    DuplicateId(String),

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}
