use miette::Diagnostic;
use thiserror::Error;

/// Main error type for oasgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum GenError {
    #[error("IO error: {0}")]
    #[diagnostic(code(oasgen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(oasgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(oasgen::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Generation error: {message}")]
    #[diagnostic(code(oasgen::generate))]
    Generate {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, GenError>;
