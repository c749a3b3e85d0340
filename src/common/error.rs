//! Error types for pagedb.

use thiserror::Error;

use crate::common::config::MAX_FILE_SIZE;

/// Crate-wide result alias in the style of `std::io::Result`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagedb.
///
/// One enum covers both classes of failure the engine distinguishes:
///
/// - **Recoverable**: [`Error::TableFull`] and [`Error::TableEmpty`] are
///   expected steady-state outcomes. The REPL reports them and keeps going.
/// - **Fatal**: everything else (I/O failures, an unusable backing file)
///   is unrecoverable; the binary prints the error and exits nonzero.
///
/// Contract violations (page index out of range, flushing a page that was
/// never loaded) are not errors at all: they are bugs, and the pager panics
/// on them rather than returning a value.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error from the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The table already holds the maximum number of rows.
    #[error("table is full")]
    TableFull,

    /// A scan was requested on a table with no rows.
    #[error("table is empty")]
    TableEmpty,

    /// The backing file's length is not a whole number of rows.
    ///
    /// A cleanly closed database is always `full_pages * 4096 +
    /// leftover_rows * 293` bytes long; anything else was not written by
    /// this program (or was truncated).
    #[error("database file is corrupted: {0} bytes is not a whole number of rows")]
    CorruptFile(u64),

    /// The backing file holds more rows than the table supports.
    #[error("database file is {0} bytes, larger than the {}-byte maximum", MAX_FILE_SIZE)]
    FileTooLarge(u64),
}
