//! Reader errors.

use std::fmt;
use std::io;

/// A coordinate pair that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePointError {
    /// Not of the form `(x,y)`.
    Malformed(String),
    /// A coordinate is not a finite number.
    InvalidNumber(String),
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(text) => write!(f, "expected `(x,y)`, found `{text}`"),
            Self::InvalidNumber(text) => write!(f, "invalid coordinate `{text}`"),
        }
    }
}

impl std::error::Error for ParsePointError {}

/// Failure to read a problem file. Line numbers are 1-based and count the
/// header line.
#[derive(Debug)]
pub enum ReadError {
    /// The underlying reader failed.
    Io(io::Error),
    /// A record has fewer than three fields.
    MissingField {
        /// Line number.
        line: usize,
        /// Name of the first missing field.
        field: &'static str,
    },
    /// A coordinate pair is not of the form `(x,y)`.
    InvalidPoint {
        /// Line number.
        line: usize,
        /// Offending text.
        text: String,
    },
    /// A coordinate is not a finite number.
    InvalidNumber {
        /// Line number.
        line: usize,
        /// Offending text.
        text: String,
    },
}

impl ReadError {
    pub(crate) fn at_line(line: usize, err: ParsePointError) -> Self {
        match err {
            ParsePointError::Malformed(text) => Self::InvalidPoint { line, text },
            ParsePointError::InvalidNumber(text) => Self::InvalidNumber { line, text },
        }
    }

    /// Line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Io(_) => None,
            Self::MissingField { line, .. }
            | Self::InvalidPoint { line, .. }
            | Self::InvalidNumber { line, .. } => Some(*line),
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read problem: {err}"),
            Self::MissingField { line, field } => write!(f, "line {line}: missing {field}"),
            Self::InvalidPoint { line, text } => {
                write!(f, "line {line}: expected `(x,y)`, found `{text}`")
            }
            Self::InvalidNumber { line, text } => {
                write!(f, "line {line}: invalid coordinate `{text}`")
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display() {
        let err = ReadError::MissingField {
            line: 3,
            field: "dropoff",
        };
        assert_eq!(err.to_string(), "line 3: missing dropoff");
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_at_line() {
        let err = ReadError::at_line(5, ParsePointError::InvalidNumber("abc".into()));
        assert!(matches!(err, ReadError::InvalidNumber { line: 5, ref text } if text == "abc"));
    }

    #[test]
    fn test_io_source() {
        let err = ReadError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.source().is_some());
        assert_eq!(err.line(), None);
    }
}
