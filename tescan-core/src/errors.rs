use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BedError {
    #[error("Can't open input file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Line {line}: expected at least 3 tab-separated fields")]
    Malformed { line: u64 },

    #[error("Line {line}: invalid {field} coordinate: {value:?}")]
    InvalidCoordinate {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
