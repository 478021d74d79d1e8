//! Error types for package operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::PYTHON27_ENV_VAR;

/// Errors that can occur while building a package.
#[derive(Debug, Error)]
pub enum PackageError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Invalid or missing configuration, detected before any filesystem mutation.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// A compiled artifact does not carry the Python 2.7 bytecode magic number.
    #[error(
        "File {} is not valid Python 2.7 byte-compiled file, ensure that \
         the --python27 option or the {PYTHON27_ENV_VAR} environment variable \
         points to a Python 2.7 interpreter",
        path.display()
    )]
    IncompatibleBytecode { path: PathBuf },

    /// A delegated toolchain subprocess exited with a failure status.
    #[error("{program} exited with status {code:?}")]
    Subprocess { program: String, code: Option<i32> },

    /// A file expected by the build is missing.
    #[error("Missing required file: {0}")]
    MissingFile(String),
}
