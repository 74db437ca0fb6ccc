//! Error handling for the nitrogen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for nitrogen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents a malformed persisted configuration value. Recovered
    /// per-field with a logged fallback, never fatal on its own.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents a missing, empty or unreadable template source tree.
    /// Fatal, raised before any destination write happens.
    #[error("Catalog error: {0}.")]
    CatalogError(String),

    /// Represents a failure of the template source provider to materialize
    /// a local source tree.
    #[error("Template source error: {0}.")]
    FetchError(String),

    /// Represents a failed destination write. Fatal for the run; the
    /// pipeline stops scheduling further writes once one occurs.
    #[error("Failed to write '{path}': {source}.")]
    WriteError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Represents a failed interactive prompt.
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with nitrogen's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
