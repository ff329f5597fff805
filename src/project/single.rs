//! Single file projects: one C source or one C header.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::file::{FileBuilder, FileKind};
use crate::options::{add_extension, FileOptions, ProjectOptions};
use crate::project::package::{self, Package};
use crate::project::{Dirtree, Layout, PlannedFile, Project};
use crate::renderer::TemplateRenderer;

pub struct SingleFile {
    description: &'static str,
    dirtree: Dirtree,
    file: PlannedFile,
    package: Option<Package>,
}

impl SingleFile {
    fn new(options: &ProjectOptions, base_dir: &Path, kind: FileKind, extension: &str) -> Self {
        let layout = Layout::new(options, base_dir);
        let file =
            FileOptions::new(add_extension(&options.name, extension), options).header_comment(true);
        let description = match kind {
            FileKind::Header => "single header",
            _ => "single source",
        };

        Self {
            description,
            dirtree: Dirtree::new(&layout),
            file: PlannedFile::new(&layout.project_dir, FileBuilder::new(kind, file)),
            package: package::plan(options, layout.package_dir.as_deref()),
        }
    }
}

impl fmt::Display for SingleFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project type: {}", self.description)?;
        write!(f, "Filename: {}", self.file.target().display())
    }
}

impl Project for SingleFile {
    fn build(&self, renderer: &dyn TemplateRenderer) -> Result<()> {
        self.dirtree.create()?;
        self.file.build(renderer)?;

        if let Some(package) = &self.package {
            package.build(renderer)?;
        }

        Ok(())
    }

    fn files(&self) -> Vec<PathBuf> {
        let mut files = vec![self.file.target()];
        files.extend(self.package.iter().flat_map(Package::files));
        files
    }

    fn directories(&self) -> Vec<PathBuf> {
        self.dirtree.paths()
    }
}

/// `<name>.c` in the output directory.
pub fn source(options: &ProjectOptions, base_dir: &Path) -> Result<Box<dyn Project>> {
    Ok(Box::new(SingleFile::new(options, base_dir, FileKind::Source, ".c")))
}

/// `<name>.h` in the output directory.
pub fn header(options: &ProjectOptions, base_dir: &Path) -> Result<Box<dyn Project>> {
    Ok(Box::new(SingleFile::new(options, base_dir, FileKind::Header, ".h")))
}
