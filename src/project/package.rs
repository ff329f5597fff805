//! Debian packaging files generated next to a project.

use std::path::{Path, PathBuf};

use crate::constants::{BUILD_SCRIPT, DEBIAN_DIR, DEBIAN_SCRIPTS, MISC_DIR};
use crate::error::Result;
use crate::file::{FileBuilder, FileKind};
use crate::options::{FileOptions, ProjectOptions};
use crate::project::{build_files, targets, PlannedFile};
use crate::renderer::TemplateRenderer;

/// Maintainer scripts, systemd unit and build script of a package.
#[derive(Debug, Clone)]
pub struct Package {
    debian: Vec<PlannedFile>,
    service: PlannedFile,
    builder: PlannedFile,
}

impl Package {
    /// Plans the package files inside `package_dir` (`pkg_install`).
    pub fn new(options: &ProjectOptions, package_dir: &Path) -> Self {
        let debian_dir = package_dir.join(DEBIAN_DIR);
        let debian = DEBIAN_SCRIPTS
            .iter()
            .map(|script| {
                let file = FileOptions::new(*script, options)
                    .header_comment(true)
                    .executable(true);
                PlannedFile::new(&debian_dir, FileBuilder::new(FileKind::Script, file))
            })
            .collect();

        let service = FileOptions::new(format!("{}.service", options.name.to_lowercase()), options);
        let builder = FileOptions::new(BUILD_SCRIPT, options)
            .header_comment(true)
            .executable(true);

        Self {
            debian,
            service: PlannedFile::new(
                package_dir.join(MISC_DIR),
                FileBuilder::new(FileKind::Text, service),
            ),
            builder: PlannedFile::new(package_dir, FileBuilder::new(FileKind::Script, builder)),
        }
    }

    pub fn build(&self, renderer: &dyn TemplateRenderer) -> Result<()> {
        build_files(&self.debian, renderer)?;
        self.service.build(renderer)?;
        self.builder.build(renderer)?;
        Ok(())
    }

    pub fn files(&self) -> Vec<PathBuf> {
        targets(self.debian.iter().chain([&self.service, &self.builder]))
    }
}

/// Plans the package of a project when packaging was requested.
pub fn plan(options: &ProjectOptions, package_dir: Option<&Path>) -> Option<Package> {
    package_dir.map(|dir| Package::new(options, dir))
}
