//! The libxante plugin project, written in C or Go, with a launch script.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::{INCLUDE_DIR, SCRIPT_DIR, SOURCE_DIR};
use crate::error::Result;
use crate::file::{FileBuilder, FileKind};
use crate::options::{FileOptions, Language, ProjectOptions};
use crate::project::package::{self, Package};
use crate::project::{build_files, targets, Dirtree, Layout, PlannedFile, Project, Role};
use crate::renderer::TemplateRenderer;

pub struct XantePlugin {
    name: String,
    language: Language,
    dirtree: Dirtree,
    sources: Vec<PlannedFile>,
    headers: Vec<PlannedFile>,
    makefile: PlannedFile,
    script: PlannedFile,
    package: Option<Package>,
}

impl fmt::Display for XantePlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project type: xante plugin ({})", self.language)?;
        write!(f, "Name: {}", self.name)
    }
}

impl Project for XantePlugin {
    fn build(&self, renderer: &dyn TemplateRenderer) -> Result<()> {
        self.dirtree.create()?;
        build_files(&self.sources, renderer)?;
        build_files(&self.headers, renderer)?;
        self.makefile.build(renderer)?;
        self.script.build(renderer)?;

        if let Some(package) = &self.package {
            package.build(renderer)?;
        }

        Ok(())
    }

    fn files(&self) -> Vec<PathBuf> {
        let mut files = targets(self.sources.iter().chain(&self.headers));
        files.push(self.makefile.target());
        files.push(self.script.target());
        files.extend(self.package.iter().flat_map(Package::files));
        files
    }

    fn directories(&self) -> Vec<PathBuf> {
        self.dirtree.paths()
    }
}

pub fn new(options: &ProjectOptions, base_dir: &Path) -> Result<Box<dyn Project>> {
    let layout = Layout::new(options, base_dir);
    let mut dirtree = Dirtree::new(&layout);
    let source_dir = dirtree.add(Role::Source, layout.project_dir.join(SOURCE_DIR));

    let (source, makefile, headers) = match options.language {
        Language::Go => {
            let source = FileOptions::new("plugin.go", options).header_comment(true);
            let source = PlannedFile::new(&source_dir, FileBuilder::new(FileKind::GoSource, source));
            (source, "Makefile", Vec::new())
        }
        _ => {
            let include_dir = dirtree.add(Role::Header, layout.project_dir.join(INCLUDE_DIR));
            let source = FileOptions::new("plugin.c", options).header_comment(true);
            let header = FileOptions::new("plugin.h", options).header_comment(true);
            (
                PlannedFile::new(&source_dir, FileBuilder::new(FileKind::Source, source)),
                "CMakeLists.txt",
                vec![PlannedFile::new(include_dir, FileBuilder::new(FileKind::Header, header))],
            )
        }
    };

    let script_dir = dirtree.add(Role::Script, layout.project_dir.join(SCRIPT_DIR));
    let script = FileOptions::new(options.name.as_str(), options)
        .header_comment(true)
        .executable(true);
    let makefile = FileOptions::new(makefile, options);

    Ok(Box::new(XantePlugin {
        name: options.name.clone(),
        language: options.language,
        sources: vec![source],
        headers,
        makefile: PlannedFile::new(
            &layout.project_dir,
            FileBuilder::new(FileKind::Makefile, makefile),
        ),
        script: PlannedFile::new(script_dir, FileBuilder::new(FileKind::Script, script)),
        package: package::plan(options, layout.package_dir.as_deref()),
        dirtree,
    }))
}
