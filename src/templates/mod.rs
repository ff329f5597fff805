//! Built-in templates and the selector that picks one for a file.
//!
//! The choice depends only on the file kind, its basename, the directory it
//! sits in and the project options. Unknown files get an empty body.

pub mod c;
pub mod cmake;
pub mod plugin;
pub mod shell;

use crate::constants::{API_DIR, INTERNAL_DIR, LIBRARY_PREFIX};
use crate::file::FileKind;
use crate::options::{FileOptions, Language, ProjectKind};

/// Body template of a file and the extra data it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub text: &'static str,
    /// Header directory the include list must point into, when the
    /// template uses `include_files`.
    pub include_scope: Option<&'static str>,
}

impl Template {
    pub const EMPTY: Template = Template { text: "", include_scope: None };

    fn plain(text: &'static str) -> Self {
        Self { text, include_scope: None }
    }

    fn with_includes(text: &'static str, scope: &'static str) -> Self {
        Self { text, include_scope: Some(scope) }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Picks the body template of a file.
pub fn select(kind: FileKind, options: &FileOptions) -> Template {
    let basename = options.basename();
    let project = &options.project;

    match kind {
        FileKind::Source => select_source(&basename, options),
        FileKind::Header => select_header(&basename, options),
        FileKind::GoSource if basename == "plugin" => Template::plain(plugin::GO_SOURCE),
        FileKind::GoSource => Template::EMPTY,
        FileKind::Makefile => match (project.kind, project.language) {
            (ProjectKind::Library, _) => Template::plain(cmake::LIBRARY),
            (ProjectKind::XantePlugin, Language::Go) => Template::plain(cmake::GO_PLUGIN),
            (ProjectKind::XantePlugin, _) => Template::plain(cmake::PLUGIN),
            _ => Template::plain(cmake::APPLICATION),
        },
        FileKind::Symbol => Template::plain(cmake::SYMBOL),
        FileKind::Script => select_script(&basename, options),
        FileKind::Text => match options.extension().as_deref() {
            Some("service") if project.package => Template::plain(shell::SYSTEMD_SERVICE),
            _ => Template::EMPTY,
        },
    }
}

fn select_source(basename: &str, options: &FileOptions) -> Template {
    let project = &options.project;

    match (project.kind, basename) {
        (ProjectKind::Application, "main") => Template::plain(c::MAIN_SOURCE),
        (ProjectKind::Library, "error") if project.libcollections => {
            Template::plain(c::ERROR_SOURCE)
        }
        (ProjectKind::XantePlugin, "plugin") => Template::plain(plugin::C_SOURCE),
        _ => Template::EMPTY,
    }
}

fn select_header(basename: &str, options: &FileOptions) -> Template {
    let project = &options.project;
    let parent = options.parent_name();

    match project.kind {
        ProjectKind::Library => {
            let library_name = format!("{LIBRARY_PREFIX}{}", project.name);

            if basename == library_name {
                Template::with_includes(c::LIBRARY_HEADER, API_DIR)
            } else if basename == "internal" {
                Template::with_includes(c::LIBRARY_INTERNAL_HEADER, INTERNAL_DIR)
            } else if basename == "error" && project.libcollections {
                if parent.as_deref() == Some(INTERNAL_DIR) {
                    Template::plain(c::INTERNAL_ERROR_HEADER)
                } else {
                    Template::plain(c::API_ERROR_HEADER)
                }
            } else {
                Template::EMPTY
            }
        }
        ProjectKind::Application => {
            if basename == project.name {
                Template::plain(c::APPLICATION_HEADER)
            } else if basename == format!("{}_def", project.name) {
                Template::plain(c::APPLICATION_DEFINES)
            } else {
                Template::EMPTY
            }
        }
        ProjectKind::XantePlugin if basename == "plugin" => Template::plain(plugin::C_HEADER),
        _ => Template::EMPTY,
    }
}

fn select_script(basename: &str, options: &FileOptions) -> Template {
    let project = &options.project;

    if project.kind == ProjectKind::XantePlugin && basename == project.name {
        return Template::plain(plugin::LAUNCH_SCRIPT);
    }

    if project.package && basename == "build-package" {
        return Template::plain(shell::BUILD_PACKAGE);
    }

    // Debian maintainer scripts carry only the comment block and `exit 0`.
    Template::EMPTY
}
