//! Failures while decoding a GTFS file
use thiserror::Error;

/// Raw text of a row that could not be decoded
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// Column names, from the header of the file
    pub headers: Vec<String>,
    /// Fields of the row, in column order
    pub values: Vec<String>,
}

impl RawRow {
    pub(crate) fn new(headers: &csv::StringRecord, row: &csv::StringRecord) -> Self {
        Self {
            headers: headers.iter().map(String::from).collect(),
            values: row.iter().map(String::from).collect(),
        }
    }
}

/// Why a file could not be turned into records
///
/// Both variants carry the name of the file, the position of the faulty row is given by [Error::line].
#[derive(Error, Debug)]
pub enum Error {
    /// The file could not be opened or read
    #[error("cannot read '{file_name}'")]
    Io {
        /// Name of the file
        file_name: String,
        /// Cause
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid CSV, or one of its rows does not fit the record
    #[error("cannot decode '{file_name}'")]
    Csv {
        /// Name of the file
        file_name: String,
        /// Cause, as reported by the csv reader
        #[source]
        source: csv::Error,
        /// The faulty row, when the CSV itself was fine
        row: Option<RawRow>,
    },
}

impl Error {
    /// Name of the file that failed
    pub fn file_name(&self) -> &str {
        match self {
            Error::Io { file_name, .. } | Error::Csv { file_name, .. } => file_name,
        }
    }

    /// Line of the faulty row, starting at 1 with the header
    pub fn line(&self) -> Option<u64> {
        match self {
            Error::Csv { source, .. } => source.position().map(|p| p.line()),
            Error::Io { .. } => None,
        }
    }
}
