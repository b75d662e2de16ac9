use miette::Diagnostic;
use thiserror::Error;

/// Main error type for icondoc operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("IO error: {0}")]
    #[diagnostic(code(icondoc::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(icondoc::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Malformed filename {filename:?}")]
    #[diagnostic(code(icondoc::filename))]
    MalformedFilename {
        filename: String,
        #[help]
        expected: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(icondoc::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Check failed: {message}")]
    #[diagnostic(code(icondoc::check))]
    Check {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl IconError {
    /// Wrap an IO failure on a specific path.
    pub fn io(path: impl Into<std::path::PathBuf>, message: impl std::fmt::Display) -> Self {
        IconError::Io {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IconError>;
