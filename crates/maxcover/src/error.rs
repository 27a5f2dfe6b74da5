//! Crate-level error type.
//!
//! Every failure here is fatal for the single-shot pipeline: callers report
//! and exit, nothing retries or recovers partially.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A radius, coordinate, or point count failed to parse.
    #[error("parse error: {0}")]
    Parse(String),

    /// The points file could not be opened or read.
    #[error("cannot read points file `{path}`: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Geometrically meaningless input, e.g. a non-positive squared radius.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The arrangement produced no candidate vertices (empty input).
    #[error("no candidate vertices: the input produced an empty arrangement")]
    EmptyCandidateSet,
}
