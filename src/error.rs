//! Error handling for the source-tpl application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

use crate::options::{Language, ProjectKind};

/// Custom error types for source-tpl operations.
///
/// This enum represents all possible errors that can occur while validating
/// options and generating a project. It implements the standard Error trait
/// through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested project kind is not a known name or code.
    #[error("Unsupported project kind: '{0}'.")]
    UnsupportedProjectKind(String),

    /// The requested language is unknown.
    #[error("Unsupported programming language: '{0}'.")]
    UnsupportedLanguage(String),

    /// The language is known but cannot be used with the chosen project kind.
    #[error("Unsupported programming language: {language} is not available for {kind} projects.")]
    IncompatibleLanguage { language: Language, kind: ProjectKind },

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// No factory is registered for the project kind.
    #[error("Unimplemented project: {0}.")]
    UnimplementedProject(ProjectKind),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),
}

impl Error {
    /// Whether the error comes from rejected user input rather than from
    /// the generation itself.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedProjectKind(_)
                | Error::UnsupportedLanguage(_)
                | Error::IncompatibleLanguage { .. }
                | Error::ValidationError(_)
        )
    }
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
