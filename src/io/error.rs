//! Error types for the input/output collaborators
//!
//! The clustering stages themselves cannot fail; every variant here comes from
//! reading input, writing artifacts or validating configuration.

use std::fmt;
use std::path::PathBuf;

/// Main error type for clustering runs
#[derive(Debug)]
pub enum ClusterError {
    /// Point file could not be opened or read
    InputRead {
        /// Path to the point file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Point file was readable but held no point inside the grid
    NoValidPoints {
        /// Path to the point file
        path: PathBuf,
        /// Number of lines that parsed as points (in or out of bounds)
        parsed: usize,
        /// Grid dimensions used for filtering (width, height)
        grid_dimensions: (usize, usize),
    },

    /// Configuration value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the rendered diagram
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

    /// Internal computation produced an inconsistent result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for ClusterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputRead { path, source } => {
                write!(f, "Failed to read points from '{}': {source}", path.display())
            }
            Self::NoValidPoints {
                path,
                parsed,
                grid_dimensions,
            } => {
                write!(
                    f,
                    "No valid points in '{}' ({parsed} parsed, none inside the {}x{} grid)",
                    path.display(),
                    grid_dimensions.0,
                    grid_dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for ClusterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for clustering results
pub type Result<T> = std::result::Result<T, ClusterError>;

impl ClusterError {
    /// Check whether the error means the input could not be read at all
    pub const fn is_unreadable_input(&self) -> bool {
        matches!(self, Self::InputRead { .. })
    }

    /// Check whether the error means the input held nothing to cluster
    pub const fn is_empty_input(&self) -> bool {
        matches!(self, Self::NoValidPoints { .. })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ClusterError {
    ClusterError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> ClusterError {
    ClusterError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
