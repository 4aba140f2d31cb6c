//! Error types and path context for reassembly operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all reassembly operations
#[derive(Debug)]
pub enum ReassemblyError {
    /// The input path given on the command line does not exist
    InputNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The input exists but is neither a recognized archive nor a directory
    UnrecognizedInput {
        /// Path of the rejected input
        path: PathBuf,
    },

    /// No image pieces survived discovery and filtering
    NoPieces {
        /// Directory that was searched (empty when composing a bare sequence)
        root: PathBuf,
    },

    /// Failed to open or decode a piece or output image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the composed image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to read or unpack an archive
    Archive {
        /// Path to the archive
        path: PathBuf,
        /// Underlying archive error
        source: zip::result::ZipError,
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

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical computation produced an unusable result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for ReassemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputNotFound { path } => {
                write!(f, "Input not found: '{}'", path.display())
            }
            Self::UnrecognizedInput { path } => {
                write!(
                    f,
                    "Unrecognized input '{}': expected a ZIP archive or a directory",
                    path.display()
                )
            }
            Self::NoPieces { root } if root.as_os_str().is_empty() => {
                write!(f, "No image pieces to compose")
            }
            Self::NoPieces { root } => {
                write!(f, "No image pieces found under '{}'", root.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Archive { path, source } => {
                write!(f, "Failed to unpack archive '{}': {source}", path.display())
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for ReassemblyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::Archive { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for reassembly results
pub type Result<T> = std::result::Result<T, ReassemblyError>;

/// Attaches the failing path to errors converted from lower-level crates
pub trait WithPath<T> {
    /// Replace the placeholder path of a converted error with `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;

    /// Like [`WithPath::with_path`], also naming the file system operation
    ///
    /// # Errors
    ///
    /// Propagates the original error with path and operation applied
    fn with_operation(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<ReassemblyError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                ReassemblyError::ImageLoad { path: p, .. }
                | ReassemblyError::ImageExport { path: p, .. }
                | ReassemblyError::Archive { path: p, .. }
                | ReassemblyError::FileSystem { path: p, .. } => *p = path.to_path_buf(),
                _ => {}
            }
            error
        })
    }

    fn with_operation(self, path: &Path, operation: &'static str) -> Result<T> {
        self.with_path(path).map_err(|mut error| {
            if let ReassemblyError::FileSystem { operation: op, .. } = &mut error {
                *op = operation;
            }
            error
        })
    }
}

impl From<image::ImageError> for ReassemblyError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for ReassemblyError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<zip::result::ZipError> for ReassemblyError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Archive {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<walkdir::Error> for ReassemblyError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map_or_else(|| PathBuf::from("<unknown>"), Path::to_path_buf);
        Self::FileSystem {
            path,
            operation: "directory walk",
            source: err.into(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ReassemblyError {
    ReassemblyError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> ReassemblyError {
    ReassemblyError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
