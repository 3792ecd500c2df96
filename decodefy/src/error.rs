use std::error;
use std::fmt;

/// Error type for Dart model generation.
#[derive(Debug)]
pub enum DecodefyError {
    /// The command line did not carry exactly a class name and a JSON literal.
    UsageError(String),

    /// The JSON literal could not be parsed.
    InvalidInputError(serde_json::Error),

    /// The JSON literal parsed, but its top-level value is not an object.
    RootNotObjectError,

    /// I/O error (e.g., creating or writing the output file).
    IoError(std::io::Error),
}

impl error::Error for DecodefyError {}

impl fmt::Display for DecodefyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UsageError(message) => write!(f, "{message}"),
            Self::InvalidInputError(json_error) => write!(f, "Invalid JSON data: {json_error}"),
            Self::RootNotObjectError => {
                write!(f, "Invalid JSON data: top-level value must be an object")
            }
            Self::IoError(io_error) => fmt::Display::fmt(io_error, f),
        }
    }
}

impl From<std::io::Error> for DecodefyError {
    fn from(io_error: std::io::Error) -> Self {
        Self::IoError(io_error)
    }
}

impl From<serde_json::Error> for DecodefyError {
    fn from(json_error: serde_json::Error) -> Self {
        Self::InvalidInputError(json_error)
    }
}
