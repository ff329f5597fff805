//! Substitution variables available to every template.

use chrono::Datelike;
use cruet::Inflector;
use serde::Serialize;

use crate::constants::LIBRARY_MODULES;
use crate::options::{FileOptions, ProjectKind};

/// Variables a template may reference. Built once per file from its options.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContentData {
    pub project_name: String,
    /// `MY_APP` for `my-app`, usable in macro names.
    pub project_name_upper: String,
    /// `my_app` for `my-app`, usable in C identifiers.
    pub project_name_snake: String,
    /// `myApp` for `my-app`.
    pub project_name_camel: String,
    /// Directory the project lives in (`libwidget` for library `widget`).
    pub project_dir: String,
    pub author: String,
    pub date: String,
    pub year: i32,
    /// `#include` lines of the library modules, one per line.
    pub include_files: String,
    pub libcollections_include: String,
    pub libcollections_linker: String,
}

impl ContentData {
    /// Derives the template variables of a file. `include_scope` selects the
    /// header directory (`api` or `internal`) the include list points into.
    pub fn new(options: &FileOptions, include_scope: Option<&str>) -> Self {
        let project = &options.project;
        let timestamp = project.timestamp;

        let include_files = include_scope
            .map(|scope| include_lines(&LIBRARY_MODULES, scope))
            .unwrap_or_default();

        let (libcollections_include, libcollections_linker) = if project.libcollections {
            let include = match project.kind {
                ProjectKind::Library => "#ifndef _COLLECTIONS_H\n# include <collections.h>\n#endif",
                _ => "#include <collections.h>",
            };
            (include.to_string(), "collections".to_string())
        } else {
            (String::new(), String::new())
        };

        Self {
            project_name: project.name.clone(),
            project_name_upper: project.name.to_screaming_snake_case(),
            project_name_snake: project.name.to_snake_case(),
            project_name_camel: project.name.to_camel_case(),
            project_dir: project.directory_name(),
            author: project.author.clone(),
            date: timestamp.format("%a %b %e %H:%M:%S %Y").to_string(),
            year: timestamp.year(),
            include_files,
            libcollections_include,
            libcollections_linker,
        }
    }

    /// JSON context handed to the renderer.
    pub fn context(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

fn include_lines(modules: &[&str], scope: &str) -> String {
    modules
        .iter()
        .map(|module| format!("#include \"{scope}/{module}.h\"\n"))
        .collect()
}
