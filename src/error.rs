use std::path::PathBuf;
use thiserror::Error;

/// Error type for gtf2bed operations.
#[derive(Debug, Error)]
pub enum Gtf2BedError {
    /// Input file could not be opened.
    #[error("cannot open input {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Output or log file could not be created.
    #[error("cannot create {path:?}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Line carries fewer than the 8 fixed columns.
    #[error("malformed line {line}: expected at least 8 columns, found {found}")]
    MalformedLine { line: usize, found: usize },
    /// Start or end column is not a base-10 integer.
    #[error("invalid {field} coordinate {value:?} at line {line}")]
    InvalidCoordinate {
        line: usize,
        field: &'static str,
        value: String,
    },
    /// Requested feature types never seen in the input.
    #[error("not all requested feature types could be found in the input: {}", .0.join(", "))]
    MissingFeatureTypes(Vec<String>),
    /// Record lacks an attribute required to build the BED row.
    #[error("record at line {line} ({seqname}, {feature}) has no {key:?} attribute")]
    MissingAttribute {
        line: usize,
        key: &'static str,
        seqname: String,
        feature: String,
    },
    /// Wraps standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for gtf2bed operations.
pub type Result<T> = std::result::Result<T, Gtf2BedError>;
