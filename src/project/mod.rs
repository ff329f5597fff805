//! Project assemblers and the registry that dispatches a project kind to
//! its constructor.
//!
//! Every assembler computes its whole directory tree and every file it will
//! write when it is constructed. `build` then only creates the directories
//! and runs the file builders in order.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::debug;

use crate::constants::{DEBIAN_DIR, MISC_DIR, PACKAGE_DIR, PACKAGE_PREFIX};
use crate::error::{Error, Result};
use crate::file::FileBuilder;
use crate::options::{ProjectKind, ProjectOptions};
use crate::renderer::TemplateRenderer;

pub mod application;
pub mod library;
pub mod package;
pub mod plugin;
pub mod single;

/// A generated project.
pub trait Project: fmt::Display {
    /// Creates every directory, then every file of the project.
    ///
    /// Stops at the first error. Files written before it stay on disk.
    fn build(&self, renderer: &dyn TemplateRenderer) -> Result<()>;

    /// Every file the build writes, in build order.
    fn files(&self) -> Vec<PathBuf>;

    /// Every directory the build creates, in creation order.
    fn directories(&self) -> Vec<PathBuf>;
}

/// Constructor of a project assembler.
pub type ProjectFactory = fn(&ProjectOptions, &Path) -> Result<Box<dyn Project>>;

/// Immutable table mapping project kinds to their constructors.
pub struct Registry {
    factories: IndexMap<ProjectKind, ProjectFactory>,
}

impl Registry {
    pub fn new<I>(factories: I) -> Self
    where
        I: IntoIterator<Item = (ProjectKind, ProjectFactory)>,
    {
        Self { factories: factories.into_iter().collect() }
    }

    /// Registry holding every supported project kind.
    pub fn supported() -> Self {
        Self::new([
            (ProjectKind::SingleSource, single::source as ProjectFactory),
            (ProjectKind::SingleHeader, single::header as ProjectFactory),
            (ProjectKind::Application, application::new as ProjectFactory),
            (ProjectKind::Library, library::new as ProjectFactory),
            (ProjectKind::XantePlugin, plugin::new as ProjectFactory),
        ])
    }

    pub fn kinds(&self) -> impl Iterator<Item = ProjectKind> + '_ {
        self.factories.keys().copied()
    }

    /// # Errors
    /// * `Error::UnimplementedProject` if nothing is registered for `kind`
    pub fn lookup(&self, kind: ProjectKind) -> Result<ProjectFactory> {
        self.factories
            .get(&kind)
            .copied()
            .ok_or(Error::UnimplementedProject(kind))
    }

    /// Constructs the assembler of `options.kind`, rooted at `base_dir`.
    pub fn assemble(&self, options: &ProjectOptions, base_dir: &Path) -> Result<Box<dyn Project>> {
        let factory = self.lookup(options.kind)?;
        debug!("Assembling {} project '{}'", options.kind, options.name);
        factory(options, base_dir)
    }
}

/// Constructs the assembler of a project with the supported registry.
pub fn assemble<P: AsRef<Path>>(options: &ProjectOptions, base_dir: P) -> Result<Box<dyn Project>> {
    Registry::supported().assemble(options, base_dir.as_ref())
}

/// Directory roles of a project tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Project,
    Source,
    Header,
    ApiHeader,
    InternalHeader,
    Misc,
    Script,
    Package,
    Debian,
    PackageMisc,
}

/// Where a project lands on disk.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Top-level directory of everything generated.
    pub root: PathBuf,
    /// Directory holding the project itself.
    pub project_dir: PathBuf,
    /// `pkg_install` directory when packaging is requested.
    pub package_dir: Option<PathBuf>,
}

impl Layout {
    /// Multi-file projects live in `<base>/<dir>`; with packaging the tree
    /// moves to `<base>/package-<dir>/<dir>` next to `pkg_install`.
    pub fn new(options: &ProjectOptions, base_dir: &Path) -> Self {
        let dir = options.directory_name();
        let single_file = matches!(
            options.kind,
            ProjectKind::SingleSource | ProjectKind::SingleHeader
        );

        if options.package {
            let root = base_dir.join(format!("{PACKAGE_PREFIX}{dir}"));
            Self {
                project_dir: root.join(&dir),
                package_dir: Some(root.join(PACKAGE_DIR)),
                root,
            }
        } else if single_file {
            Self {
                root: base_dir.to_path_buf(),
                project_dir: base_dir.to_path_buf(),
                package_dir: None,
            }
        } else {
            Self {
                root: base_dir.to_path_buf(),
                project_dir: base_dir.join(&dir),
                package_dir: None,
            }
        }
    }
}

/// Ordered map of the directories a project needs.
#[derive(Debug, Clone, Default)]
pub struct Dirtree {
    dirs: IndexMap<Role, PathBuf>,
}

impl Dirtree {
    /// Starts a tree with the project directory and, when packaging, the
    /// package directories.
    pub fn new(layout: &Layout) -> Self {
        let mut tree = Self::default();
        tree.add(Role::Project, layout.project_dir.clone());

        if let Some(package_dir) = &layout.package_dir {
            tree.add(Role::Package, package_dir.clone());
            tree.add(Role::Debian, package_dir.join(DEBIAN_DIR));
            tree.add(Role::PackageMisc, package_dir.join(MISC_DIR));
        }

        tree
    }

    /// Registers a directory and returns its path.
    pub fn add<P: Into<PathBuf>>(&mut self, role: Role, path: P) -> PathBuf {
        let path = path.into();
        self.dirs.insert(role, path.clone());
        path
    }

    pub fn get(&self, role: Role) -> Option<&Path> {
        self.dirs.get(&role).map(PathBuf::as_path)
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.dirs.values().cloned().collect()
    }

    /// Creates every directory. Existing ones are left untouched.
    pub fn create(&self) -> Result<()> {
        for (role, path) in &self.dirs {
            debug!("Creating {:?} directory: {}", role, path.display());
            fs::create_dir_all(path)?;
        }
        Ok(())
    }
}

/// A file builder together with the directory it is built into.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub directory: PathBuf,
    pub builder: FileBuilder,
}

impl PlannedFile {
    pub fn new<P: Into<PathBuf>>(directory: P, builder: FileBuilder) -> Self {
        Self { directory: directory.into(), builder }
    }

    pub fn target(&self) -> PathBuf {
        self.builder.target(&self.directory)
    }

    pub fn build(&self, renderer: &dyn TemplateRenderer) -> Result<PathBuf> {
        self.builder.build(&self.directory, renderer)
    }
}

/// Builds every file in order, stopping at the first failure.
pub fn build_files<'a, I>(files: I, renderer: &dyn TemplateRenderer) -> Result<()>
where
    I: IntoIterator<Item = &'a PlannedFile>,
{
    for file in files {
        file.build(renderer)?;
    }
    Ok(())
}

pub fn targets<'a, I>(files: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = &'a PlannedFile>,
{
    files.into_iter().map(PlannedFile::target).collect()
}
