//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// A non-blank input line failed to decode as a record.
    /// `line` is the 1-based physical line number in the source file.
    Decode {
        line: usize,
        source: serde_json::Error,
    },
    /// A record carried a non-empty relevance list whose length differs
    /// from its index list. `record` is the 1-based ordinal of the record
    /// among non-blank lines.
    LabelWeightMismatch {
        record: usize,
        indices: usize,
        relevances: usize,
    },
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Decode { line, source } => {
                write!(f, "line {}: invalid record: {}", line, source)
            }
            Error::LabelWeightMismatch {
                record,
                indices,
                relevances,
            } => write!(
                f,
                "record {}: {} label indices but {} relevances",
                record, indices, relevances
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Decode { source, .. } => Some(source),
            Error::LabelWeightMismatch { .. } => None,
        }
    }
}
