//! Option model: project kinds, languages and the validated option records
//! handed to every assembler and file builder.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{DateTime, Local};
use regex::Regex;

use crate::constants::LIBRARY_PREFIX;
use crate::error::{Error, Result};

/// Supported project scaffolds. The discriminants are the numeric codes
/// accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    SingleSource = 1,
    SingleHeader,
    Application,
    Library,
    XantePlugin,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 5] = [
        ProjectKind::SingleSource,
        ProjectKind::SingleHeader,
        ProjectKind::Application,
        ProjectKind::Library,
        ProjectKind::XantePlugin,
    ];

    /// Name used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            ProjectKind::SingleSource => "source",
            ProjectKind::SingleHeader => "header",
            ProjectKind::Application => "application",
            ProjectKind::Library => "library",
            ProjectKind::XantePlugin => "xante-plugin",
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Resolves a numeric project code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Languages a project of this kind can be generated in.
    pub fn languages(self) -> &'static [Language] {
        match self {
            ProjectKind::XantePlugin => &[Language::C, Language::Go],
            _ => &[Language::C],
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProjectKind {
    type Err = Error;

    /// Accepts either the project name (`library`) or its code (`4`).
    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim().to_lowercase();
        let found = match value.parse::<u8>() {
            Ok(code) => Self::from_code(code),
            Err(_) => match value.as_str() {
                "plugin" => Some(ProjectKind::XantePlugin),
                name => Self::ALL.into_iter().find(|kind| kind.key() == name),
            },
        };

        found.ok_or_else(|| Error::UnsupportedProjectKind(s.to_string()))
    }
}

/// Target programming languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    C = 1,
    Java,
    Python,
    Go,
    Rust,
}

impl Language {
    pub const ALL: [Language; 5] =
        [Language::C, Language::Java, Language::Python, Language::Go, Language::Rust];

    pub fn key(self) -> &'static str {
        match self {
            Language::C => "C",
            Language::Java => "java",
            Language::Python => "python",
            Language::Go => "go",
            Language::Rust => "rust",
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Accepts the language name in any case (`C`, `go`) or its code (`4`).
    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        let found = match value.parse::<u8>() {
            Ok(code) => Self::from_code(code),
            Err(_) => Self::ALL
                .into_iter()
                .find(|language| language.key().eq_ignore_ascii_case(value)),
        };

        found.ok_or_else(|| Error::UnsupportedLanguage(s.to_string()))
    }
}

fn project_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("project name pattern is valid")
    })
}

/// Validated project options. Immutable once built.
#[derive(Debug, Clone)]
pub struct ProjectOptions {
    pub name: String,
    pub author: String,
    pub language: Language,
    pub kind: ProjectKind,
    pub package: bool,
    /// Emits libcollections-based extras (error tables, include and link lines).
    pub libcollections: bool,
    /// Instant used for every date written during this run.
    pub timestamp: DateTime<Local>,
}

impl ProjectOptions {
    /// Validates a project name and a (language, kind) pair.
    ///
    /// # Errors
    /// * `Error::ValidationError` if the name is empty or not usable as a file stem
    /// * `Error::IncompatibleLanguage` if the kind cannot be generated in `language`
    pub fn new<N: Into<String>, A: Into<String>>(
        name: N,
        author: A,
        language: Language,
        kind: ProjectKind,
    ) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;

        if !kind.languages().contains(&language) {
            return Err(Error::IncompatibleLanguage { language, kind });
        }

        Ok(Self {
            name,
            author: author.into(),
            language,
            kind,
            package: false,
            libcollections: false,
            timestamp: Local::now(),
        })
    }

    pub fn with_package(mut self, package: bool) -> Self {
        self.package = package;
        self
    }

    pub fn with_libcollections(mut self, libcollections: bool) -> Self {
        self.libcollections = libcollections;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Name of the directory holding the project: libraries get a `lib` prefix.
    pub fn directory_name(&self) -> String {
        match self.kind {
            ProjectKind::Library => format!("{LIBRARY_PREFIX}{}", self.name),
            _ => self.name.clone(),
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::ValidationError("a project name is required".to_string()));
    }

    if !project_name_regex().is_match(name) {
        return Err(Error::ValidationError(format!("invalid project name '{name}'")));
    }

    Ok(())
}

/// Options of a single generated file.
#[derive(Debug, Clone)]
pub struct FileOptions {
    /// Path relative to the directory the file is built into.
    pub name: PathBuf,
    pub header_comment: bool,
    pub executable: bool,
    /// Header installed as part of a library's include tree.
    pub library_header: bool,
    pub project: ProjectOptions,
}

impl FileOptions {
    pub fn new<P: Into<PathBuf>>(name: P, project: &ProjectOptions) -> Self {
        Self {
            name: name.into(),
            header_comment: false,
            executable: false,
            library_header: false,
            project: project.clone(),
        }
    }

    pub fn header_comment(mut self, enabled: bool) -> Self {
        self.header_comment = enabled;
        self
    }

    pub fn executable(mut self, enabled: bool) -> Self {
        self.executable = enabled;
        self
    }

    pub fn library_header(mut self, enabled: bool) -> Self {
        self.library_header = enabled;
        self
    }

    /// File name without directories and extension.
    pub fn basename(&self) -> String {
        self.name
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Name of the directory the file sits in, relative to its build directory.
    pub fn parent_name(&self) -> Option<String> {
        self.name
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
    }

    pub fn extension(&self) -> Option<String> {
        self.name
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
    }
}

/// Appends `extension` to `filename` unless it already carries one.
///
/// ```
/// use source_tpl::options::add_extension;
///
/// assert_eq!(add_extension("foo", ".c"), "foo.c");
/// assert_eq!(add_extension("foo.txt", ".c"), "foo.txt");
/// ```
pub fn add_extension(filename: &str, extension: &str) -> String {
    if Path::new(filename).extension().is_some() {
        return filename.to_string();
    }

    if extension.starts_with('.') {
        format!("{filename}{extension}")
    } else {
        format!("{filename}.{extension}")
    }
}
