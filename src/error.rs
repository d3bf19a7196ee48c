use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the merge pipeline.
///
/// Every variant terminates the current merge or request. None of them are retried.
#[derive(Error, Debug)]
pub enum MergeError {
    /// None of the sources has a header containing one of the accepted delimiters.
    #[error("Header does not contain a valid delimiter, only '|', ',', and ' ' accepted.")]
    NoDelimiter,

    /// A source header disagrees with the column names of the previous sources.
    #[error("Column names of {source_id} do not match previous sources.")]
    SchemaMismatch { source_id: String },

    /// The header names the same column twice.
    #[error("Column {column} appears more than once in the header of {source_id}.")]
    DuplicateColumn { source_id: String, column: String },

    #[error("Only allowed to sort by a max of 2 columns, got {count}.")]
    TooManySortKeys { count: usize },

    #[error("Sort column, {column}, does not exist.")]
    UnknownColumn { column: String },

    #[error("Acceptable sorts are only 'asc' or 'desc', not {direction}.")]
    InvalidDirection { direction: String },

    #[error("{} does not exist.", path.display())]
    SourceNotFound { path: PathBuf },

    /// A data line splits into a different number of fields than the schema has columns.
    #[error("{source_id}, line {line}: expected {expected} fields, found {found}.")]
    RowLengthMismatch {
        source_id: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
