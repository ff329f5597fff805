//! The application project: a CMake executable with a `main.c` and its
//! headers.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::{APPLICATION_HEADER_SUFFIXES, INCLUDE_DIR, SOURCE_DIR};
use crate::error::Result;
use crate::file::{FileBuilder, FileKind};
use crate::options::{add_extension, FileOptions, ProjectOptions};
use crate::project::package::{self, Package};
use crate::project::{build_files, targets, Dirtree, Layout, PlannedFile, Project, Role};
use crate::renderer::TemplateRenderer;

pub struct Application {
    name: String,
    dirtree: Dirtree,
    sources: Vec<PlannedFile>,
    headers: Vec<PlannedFile>,
    makefile: PlannedFile,
    package: Option<Package>,
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project type: application")?;
        write!(f, "Name: {}", self.name)
    }
}

impl Project for Application {
    fn build(&self, renderer: &dyn TemplateRenderer) -> Result<()> {
        self.dirtree.create()?;
        build_files(&self.sources, renderer)?;
        build_files(&self.headers, renderer)?;
        self.makefile.build(renderer)?;

        if let Some(package) = &self.package {
            package.build(renderer)?;
        }

        Ok(())
    }

    fn files(&self) -> Vec<PathBuf> {
        let mut files = targets(self.sources.iter().chain(&self.headers));
        files.push(self.makefile.target());
        files.extend(self.package.iter().flat_map(Package::files));
        files
    }

    fn directories(&self) -> Vec<PathBuf> {
        self.dirtree.paths()
    }
}

fn create_headers(options: &ProjectOptions, include_dir: &Path) -> Vec<PlannedFile> {
    APPLICATION_HEADER_SUFFIXES
        .iter()
        .map(|suffix| format!("{}{suffix}", options.name))
        .chain([options.name.clone()])
        .map(|header| {
            let file = FileOptions::new(add_extension(&header, ".h"), options).header_comment(true);
            PlannedFile::new(include_dir, FileBuilder::new(FileKind::Header, file))
        })
        .collect()
}

pub fn new(options: &ProjectOptions, base_dir: &Path) -> Result<Box<dyn Project>> {
    let layout = Layout::new(options, base_dir);
    let mut dirtree = Dirtree::new(&layout);
    let source_dir = dirtree.add(Role::Source, layout.project_dir.join(SOURCE_DIR));
    let include_dir = dirtree.add(Role::Header, layout.project_dir.join(INCLUDE_DIR));

    let main = FileOptions::new("main.c", options).header_comment(true);
    let makefile = FileOptions::new("CMakeLists.txt", options);

    Ok(Box::new(Application {
        name: options.name.clone(),
        sources: vec![PlannedFile::new(&source_dir, FileBuilder::new(FileKind::Source, main))],
        headers: create_headers(options, &include_dir),
        makefile: PlannedFile::new(
            &layout.project_dir,
            FileBuilder::new(FileKind::Makefile, makefile),
        ),
        package: package::plan(options, layout.package_dir.as_deref()),
        dirtree,
    }))
}
