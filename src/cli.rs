//! Command-line interface implementation for source-tpl.
//! Provides argument parsing and conversion into validated project options.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::AUTHOR_ENV;
use crate::error::Result;
use crate::options::{Language, ProjectKind, ProjectOptions};
use crate::utils::git_author_name;

/// Command-line arguments structure for source-tpl.
#[derive(Parser, Debug)]
#[command(
    name = "source-tpl",
    author,
    about = "source-tpl: creates C project templates",
    long_about = None,
    disable_version_flag = true
)]
pub struct Args {
    /// Project name
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Project author. Defaults to the git user name
    #[arg(short, long, env = AUTHOR_ENV)]
    pub author: Option<String>,

    /// Programming language: C, java, python, go, rust (or its code, 1-5)
    #[arg(short, long, default_value = "C")]
    pub language: String,

    /// Project type: source, header, application, library, xante-plugin (or its code, 1-5)
    #[arg(short = 't', long = "type", default_value = "source")]
    pub project_type: String,

    /// Create the project inside a Debian package structure
    #[arg(short, long)]
    pub package: bool,

    /// Add libcollections support to the generated code
    #[arg(long)]
    pub libcollections: bool,

    /// Directory where the project will be created
    #[arg(short, long, value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Disable project creation messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging output
    #[arg(long)]
    pub verbose: bool,

    /// Show the application version
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl Args {
    /// Resolves kind and language and validates the whole set of options.
    ///
    /// # Errors
    /// * `Error::UnsupportedProjectKind` / `Error::UnsupportedLanguage` for unknown values
    /// * `Error::IncompatibleLanguage` when the kind cannot use the language
    /// * `Error::ValidationError` for an invalid project name
    pub fn project_options(&self) -> Result<ProjectOptions> {
        let kind: ProjectKind = self.project_type.parse()?;
        let language: Language = self.language.parse()?;
        let author = self.author.clone().or_else(git_author_name).unwrap_or_default();

        Ok(ProjectOptions::new(self.name.as_str(), author, language, kind)?
            .with_package(self.package)
            .with_libcollections(self.libcollections))
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    Args::parse()
}
