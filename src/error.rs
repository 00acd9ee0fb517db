//! Errors returned when loading a feed
use std::error::Error as StdError;
use thiserror::Error;

/// An error that can occur when loading a single or split GTFS feed.
///
/// Each variant names the directory or the file where the failure occurred,
/// the underlying cause is available through [std::error::Error::source].
#[derive(Error, Debug)]
pub enum Error {
    /// The root directory of a single feed does not exist
    #[error("GTFS directory '{0}' does not exist")]
    NotFound(String),
    /// The parent directory of a split feed could not be listed
    #[error("impossible to list feeds in '{path}'")]
    Listing {
        /// Directory that could not be listed
        path: String,
        /// The initial error of the listing
        #[source]
        source: std::io::Error,
    },
    /// A known GTFS file is present but could not be decoded
    #[error("impossible to load file '{file_name}'")]
    File {
        /// Name of the file in the feed directory, e.g. `stops.txt`
        file_name: String,
        /// The decoding error
        #[source]
        source: gtfs_records::Error,
    },
    /// A feed directory could not be loaded
    #[error("impossible to load GTFS '{path}'")]
    Feed {
        /// Root directory of the feed
        path: String,
        /// What went wrong inside that directory
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Formats the error with all its causes, one per line, outermost first
    pub fn chain(&self) -> String {
        let mut lines = vec![self.to_string()];
        let mut source = StdError::source(self);
        while let Some(cause) = source {
            lines.push(format!("==> {}", cause));
            source = cause.source();
        }
        lines.join("\n")
    }
}
