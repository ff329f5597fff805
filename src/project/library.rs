//! The library project: a shared library split into modules, each with a
//! source file, a public `api` header and an `internal` header.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::{
    API_DIR, INCLUDE_DIR, INTERNAL_DIR, LIBRARY_MODULES, LIBRARY_PREFIX, MISC_DIR, SOURCE_DIR,
};
use crate::error::Result;
use crate::file::{FileBuilder, FileKind};
use crate::options::{add_extension, FileOptions, ProjectOptions};
use crate::project::package::{self, Package};
use crate::project::{build_files, targets, Dirtree, Layout, PlannedFile, Project, Role};
use crate::renderer::TemplateRenderer;

pub struct Library {
    name: String,
    dirtree: Dirtree,
    sources: Vec<PlannedFile>,
    headers: Vec<PlannedFile>,
    makefile: PlannedFile,
    symbol: PlannedFile,
    package: Option<Package>,
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project type: library")?;
        write!(f, "Name: {LIBRARY_PREFIX}{}", self.name)
    }
}

impl Project for Library {
    fn build(&self, renderer: &dyn TemplateRenderer) -> Result<()> {
        self.dirtree.create()?;
        build_files(&self.sources, renderer)?;
        build_files(&self.headers, renderer)?;
        self.makefile.build(renderer)?;
        self.symbol.build(renderer)?;

        if let Some(package) = &self.package {
            package.build(renderer)?;
        }

        Ok(())
    }

    fn files(&self) -> Vec<PathBuf> {
        let mut files = targets(self.sources.iter().chain(&self.headers));
        files.push(self.makefile.target());
        files.push(self.symbol.target());
        files.extend(self.package.iter().flat_map(Package::files));
        files
    }

    fn directories(&self) -> Vec<PathBuf> {
        self.dirtree.paths()
    }
}

fn create_sources(options: &ProjectOptions, source_dir: &Path) -> Vec<PlannedFile> {
    LIBRARY_MODULES
        .iter()
        .map(|module| {
            let file = FileOptions::new(add_extension(module, ".c"), options).header_comment(true);
            PlannedFile::new(source_dir, FileBuilder::new(FileKind::Source, file))
        })
        .collect()
}

/// The main `lib<name>.h` header, `internal/internal.h`, then one internal
/// and one api header per module. Names are relative to `include_dir`.
fn create_headers(options: &ProjectOptions, include_dir: &Path) -> Vec<PlannedFile> {
    let mut headers = vec![
        format!("{LIBRARY_PREFIX}{}", options.name),
        format!("{INTERNAL_DIR}/internal"),
    ];
    headers.extend(LIBRARY_MODULES.iter().map(|module| format!("{INTERNAL_DIR}/{module}")));
    headers.extend(LIBRARY_MODULES.iter().map(|module| format!("{API_DIR}/{module}")));

    headers
        .into_iter()
        .map(|header| {
            let file = FileOptions::new(format!("{header}.h"), options)
                .header_comment(true)
                .library_header(true);
            PlannedFile::new(include_dir, FileBuilder::new(FileKind::Header, file))
        })
        .collect()
}

pub fn new(options: &ProjectOptions, base_dir: &Path) -> Result<Box<dyn Project>> {
    let layout = Layout::new(options, base_dir);
    let mut dirtree = Dirtree::new(&layout);
    let source_dir = dirtree.add(Role::Source, layout.project_dir.join(SOURCE_DIR));
    let include_dir = dirtree.add(Role::Header, layout.project_dir.join(INCLUDE_DIR));
    dirtree.add(Role::ApiHeader, include_dir.join(API_DIR));
    dirtree.add(Role::InternalHeader, include_dir.join(INTERNAL_DIR));
    let misc_dir = dirtree.add(Role::Misc, layout.project_dir.join(MISC_DIR));

    let makefile = FileOptions::new("CMakeLists.txt", options);
    let symbol = FileOptions::new(format!("{LIBRARY_PREFIX}{}.sym", options.name), options);

    Ok(Box::new(Library {
        name: options.name.clone(),
        sources: create_sources(options, &source_dir),
        headers: create_headers(options, &include_dir),
        makefile: PlannedFile::new(
            &layout.project_dir,
            FileBuilder::new(FileKind::Makefile, makefile),
        ),
        symbol: PlannedFile::new(misc_dir, FileBuilder::new(FileKind::Symbol, symbol)),
        package: package::plan(options, layout.package_dir.as_deref()),
        dirtree,
    }))
}
