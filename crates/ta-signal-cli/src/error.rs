//! CLI error types for handling file I/O, parsing, and analysis errors.
//!
//! This module provides the [`CliError`] enum which wraps all possible errors
//! that can occur during CLI operations. Error messages are designed to be
//! actionable, providing both what went wrong and how to fix it.

use std::fmt;
use std::io;

/// CLI error type encompassing all possible error conditions.
///
/// Each variant provides context about what went wrong and, where applicable,
/// suggestions for how to fix the issue.
#[derive(Debug)]
pub enum CliError {
    /// An I/O error occurred while reading or writing files.
    IoError {
        /// The underlying I/O error.
        source: io::Error,
        /// Path that caused the error, if known.
        path: Option<String>,
    },
    /// A cell or row of the input could not be parsed.
    CsvParseError {
        /// Description of the parse error.
        message: String,
        /// Line number where the error occurred, if known.
        line: Option<usize>,
    },
    /// A required column is absent from the header row.
    MissingColumn {
        /// The normalized name of the missing column.
        column: &'static str,
        /// Normalized headers that were found.
        found: Vec<String>,
    },
    /// The analysis rejected the data or configuration.
    IndicatorError {
        /// The underlying ta-signal error.
        source: ta_signal::Error,
    },
    /// An invalid argument was provided.
    InvalidArgument {
        /// Name of the invalid argument.
        argument: String,
        /// Description of why it's invalid.
        reason: String,
        /// Suggestion for valid values.
        suggestion: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::IoError { source, path } => {
                if let Some(p) = path {
                    write!(f, "I/O error with file '{p}': {source}. ")?;
                    write!(
                        f,
                        "Check that the file exists and you have the required permissions."
                    )
                } else {
                    write!(f, "I/O error: {source}")
                }
            }
            CliError::CsvParseError { message, line } => {
                if let Some(l) = line {
                    write!(f, "CSV parse error on line {l}: {message}. ")?;
                } else {
                    write!(f, "CSV parse error: {message}. ")?;
                }
                write!(
                    f,
                    "Every close and volume cell must hold a finite number."
                )
            }
            CliError::MissingColumn { column, found } => {
                write!(
                    f,
                    "required column '{column}' not found (found: {}). ",
                    found.join(", ")
                )?;
                write!(f, "The header row must name both 'close' and 'volume'.")
            }
            CliError::IndicatorError { source } => {
                write!(f, "Analysis error: {source}")
            }
            CliError::InvalidArgument {
                argument,
                reason,
                suggestion,
            } => {
                write!(f, "Invalid argument '{argument}': {reason}")?;
                if let Some(s) = suggestion {
                    write!(f, ". {s}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::IoError { source, .. } => Some(source),
            CliError::IndicatorError { source } => Some(source),
            CliError::CsvParseError { .. }
            | CliError::MissingColumn { .. }
            | CliError::InvalidArgument { .. } => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::IoError {
            source: err,
            path: None,
        }
    }
}

impl From<ta_signal::Error> for CliError {
    fn from(err: ta_signal::Error) -> Self {
        CliError::IndicatorError { source: err }
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line() as usize);
        CliError::CsvParseError {
            message: err.to_string(),
            line,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::IoError {
            source: err.into(),
            path: None,
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    // ==========================================================================
    // Display Tests
    // ==========================================================================

    #[test]
    fn test_io_error_display_with_path() {
        let err = CliError::IoError {
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
            path: Some("prices.csv".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("prices.csv"));
        assert!(msg.contains("file not found"));
        assert!(msg.contains("Check that the file exists"));
    }

    #[test]
    fn test_io_error_display_without_path() {
        let err = CliError::IoError {
            source: io::Error::new(io::ErrorKind::Other, "broken pipe"),
            path: None,
        };
        assert_eq!(err.to_string(), "I/O error: broken pipe");
    }

    #[test]
    fn test_csv_parse_error_display() {
        let err = CliError::CsvParseError {
            message: "cannot parse 'abc' as number in column 'close'".to_string(),
            line: Some(4),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("CSV parse error on line 4: cannot parse 'abc'"));

        let err = CliError::CsvParseError {
            message: "bad".to_string(),
            line: None,
        };
        assert!(err.to_string().starts_with("CSV parse error: bad."));
    }

    #[test]
    fn test_missing_column_display() {
        let err = CliError::MissingColumn {
            column: "volume",
            found: vec!["date".to_string(), "close".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'volume'"));
        assert!(msg.contains("found: date, close"));
    }

    #[test]
    fn test_indicator_error_display() {
        let err: CliError = ta_signal::Error::NegativeVolume { index: 3 }.into();
        assert_eq!(err.to_string(), "Analysis error: negative volume at index 3");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument {
            argument: "output".to_string(),
            reason: "output path is the input file".to_string(),
            suggestion: Some("Choose a different -o path".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Invalid argument 'output': output path is the input file. Choose a different -o path"
        );
    }

    // ==========================================================================
    // Conversion Tests
    // ==========================================================================

    #[test]
    fn test_from_io_error() {
        let err: CliError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, CliError::IoError { path: None, .. }));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CliError = json_err.into();
        assert!(matches!(err, CliError::IoError { .. }));
    }

    #[test]
    fn test_source_is_none_for_input_errors() {
        let err = CliError::MissingColumn {
            column: "close",
            found: vec![],
        };
        assert!(err.source().is_none());
    }
}
