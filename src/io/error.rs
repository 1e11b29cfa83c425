//! Error types for all knotwork operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all knotwork operations
#[derive(Debug)]
pub enum KnotError {
    /// Grid dimension outside the allowed range after normalization
    InvalidDimension {
        /// Which dimension failed: "rows" or "columns"
        axis: &'static str,
        /// The rejected value
        value: usize,
        /// Inclusive lower bound
        min: usize,
        /// Inclusive upper bound
        max: usize,
    },

    /// Attempted cut between control nodes that cannot be connected
    InvalidCutSegment {
        /// Row of the starting node
        from_row: usize,
        /// Column of the starting node
        from_column: usize,
        /// Row of the target node
        to_row: usize,
        /// Column of the target node
        to_column: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Pattern text could not be parsed
    PatternParse {
        /// 1-based line number where parsing failed
        line: usize,
        /// Description of the failure
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for KnotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                axis,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "Invalid knot {axis}: {value} is outside [{min}, {max}]"
                )
            }
            Self::InvalidCutSegment {
                from_row,
                from_column,
                to_row,
                to_column,
            } => {
                write!(
                    f,
                    "Cannot cut from node ({from_row}, {from_column}) to ({to_row}, {to_column}): \
                     nodes must share a row, or a column with matching row parity"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::PatternParse { line, reason } => {
                write!(f, "Pattern parse error at line {line}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for KnotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for knotwork results
pub type Result<T> = std::result::Result<T, KnotError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> KnotError {
    KnotError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a pattern parse error for a 1-based line number
pub fn parse_error(line: usize, reason: impl Into<String>) -> KnotError {
    KnotError::PatternParse {
        line,
        reason: reason.into(),
    }
}

/// Create a file system error with path and operation context
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> KnotError {
    KnotError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_error_names_axis_and_bounds() {
        let error = KnotError::InvalidDimension {
            axis: "rows",
            value: 102,
            min: 4,
            max: 100,
        };
        assert_eq!(
            error.to_string(),
            "Invalid knot rows: 102 is outside [4, 100]"
        );
    }

    #[test]
    fn file_system_error_preserves_source() {
        let error = file_system_error(
            "out.svg",
            "write",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(std::error::Error::source(&error).is_some());
        assert!(error.to_string().contains("out.svg"));
    }
}
