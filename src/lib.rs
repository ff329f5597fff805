//! source-tpl creates C project templates.
//! It maps a project kind to an assembler that lays out the directory tree
//! and writes every boilerplate file from built-in templates.

/// Command-line interface module for the source-tpl application
pub mod cli;

/// Common constants used throughout the application
pub mod constants;

/// Template substitution variables
pub mod content;

/// Error types and handling for the source-tpl application
pub mod error;

/// Single file generation: file kinds and the four-section file builder
pub mod file;

/// Logger initialisation
pub mod logger;

/// Project kinds, languages and validated options
pub mod options;

/// Project assemblers and the factory registry
/// Supported projects:
/// - single source and single header files
/// - application and library CMake projects
/// - libxante plugins, in C or Go
pub mod project;

/// Template rendering functionality
pub mod renderer;

/// Built-in templates and the template selector
pub mod templates;

/// Helpers querying the environment
pub mod utils;
