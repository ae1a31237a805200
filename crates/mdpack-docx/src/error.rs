use std::fmt;
use std::io;

/// Failure while assembling or writing the output package.
///
/// All variants are fatal for the document being converted. Writers go
/// through a temporary file, so a failure never leaves a partial package
/// at the destination path.
#[derive(Debug)]
pub enum PackageError {
    /// Underlying I/O failure (disk full, permissions, missing source).
    Io(io::Error),
    /// The zip container could not be written.
    Zip(zip::result::ZipError),
}

impl fmt::Display for PackageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageError::Io(e) => write!(f, "package I/O failed: {}", e),
            PackageError::Zip(e) => write!(f, "zip container write failed: {}", e),
        }
    }
}

impl std::error::Error for PackageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PackageError::Io(e) => Some(e),
            PackageError::Zip(e) => Some(e),
        }
    }
}

impl From<io::Error> for PackageError {
    fn from(e: io::Error) -> Self {
        PackageError::Io(e)
    }
}

impl From<zip::result::ZipError> for PackageError {
    fn from(e: zip::result::ZipError) -> Self {
        PackageError::Zip(e)
    }
}
