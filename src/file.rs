//! Single file generation.
//!
//! A [`FileBuilder`] writes one file in four ordered sections: the optional
//! header comment, the header, the body and the footer. What goes in each
//! section is decided by the [`FileKind`] of the file and, for the body, by
//! the template selector.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::constants::LIBRARY_PREFIX;
use crate::content::ContentData;
use crate::error::Result;
use crate::options::{FileOptions, ProjectKind};
use crate::renderer::TemplateRenderer;
use crate::templates::{self, c, plugin, shell, Template};

/// Kinds of generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// C source file.
    Source,
    /// C header, wrapped in an include guard.
    Header,
    /// Go source of a cgo plugin.
    GoSource,
    /// CMakeLists.txt or Makefile.
    Makefile,
    /// Linker version script of a library.
    Symbol,
    /// Bash script, terminated by `exit 0`.
    Script,
    /// Plain text file such as a systemd unit.
    Text,
}

impl FileKind {
    /// Template of the header comment block, for the kinds that have one.
    pub fn comment_template(self) -> Option<&'static str> {
        match self {
            FileKind::Source | FileKind::Header | FileKind::GoSource => Some(c::HEADER_COMMENT),
            FileKind::Script => Some(shell::HEADER_COMMENT),
            FileKind::Makefile | FileKind::Symbol | FileKind::Text => None,
        }
    }
}

/// Creates one file from its options, kind and selected template.
#[derive(Debug, Clone)]
pub struct FileBuilder {
    options: FileOptions,
    kind: FileKind,
    template: Template,
    data: ContentData,
}

impl FileBuilder {
    /// Selects the body template of the file and derives its variables.
    pub fn new(kind: FileKind, options: FileOptions) -> Self {
        let template = templates::select(kind, &options);
        let data = ContentData::new(&options, template.include_scope);

        Self { options, kind, template, data }
    }

    /// Path the file is written to when built into `directory`.
    pub fn target<P: AsRef<Path>>(&self, directory: P) -> PathBuf {
        directory.as_ref().join(&self.options.name)
    }

    /// Opening section: include guard, include line, package clause or shebang.
    pub fn header(&self) -> String {
        let project = &self.options.project;

        match self.kind {
            FileKind::Header => {
                format!("\n#ifndef _{0}_H\n#define _{0}_H\n", self.guard_name())
            }
            FileKind::Source => match project.kind {
                ProjectKind::Application => format!("\n#include \"{}.h\"\n", project.name),
                ProjectKind::Library => {
                    format!("\n#include \"{LIBRARY_PREFIX}{}.h\"\n", project.name)
                }
                ProjectKind::XantePlugin => "\n#include \"plugin.h\"\n".to_string(),
                _ => "\n#include <stdio.h>\n#include <stdlib.h>\n".to_string(),
            },
            FileKind::GoSource => plugin::GO_PREAMBLE.to_string(),
            FileKind::Script if !self.options.header_comment => shell::SHEBANG.to_string(),
            _ => String::new(),
        }
    }

    /// Closing section.
    pub fn footer(&self) -> String {
        match self.kind {
            FileKind::Header => "\n#endif\n".to_string(),
            FileKind::Script => "\nexit 0\n".to_string(),
            _ => String::new(),
        }
    }

    /// Include guard stem, `LIBWIDGET_INTERNAL_ERROR` for a library's
    /// `internal/error.h`, `WIDGET_DEF` for an application's `widget_def.h`.
    fn guard_name(&self) -> String {
        let basename = guard_case(&self.options.basename());

        if !self.options.library_header {
            return basename;
        }

        let library = guard_case(&format!("{LIBRARY_PREFIX}{}", self.options.project.name));
        match self.options.parent_name() {
            Some(parent) => format!("{library}_{}_{basename}", guard_case(&parent)),
            None if basename == library => library,
            None => format!("{library}_{basename}"),
        }
    }

    /// Creates the file inside `directory` and writes every section.
    ///
    /// A body that fails to render is skipped with a warning; the file still
    /// gets its header and footer.
    ///
    /// # Errors
    /// * `Error::IoError` if the file cannot be created, written or made executable
    pub fn build<P: AsRef<Path>>(
        &self,
        directory: P,
        renderer: &dyn TemplateRenderer,
    ) -> Result<PathBuf> {
        let target = self.target(directory);
        debug!("Writing file: {}", target.display());

        let context = self.data.context();
        let mut writer = BufWriter::new(File::create(&target)?);

        if self.options.header_comment {
            if let Some(comment) = self.kind.comment_template() {
                write_rendered(&mut writer, renderer, comment, &context, &target)?;
            }
        }

        writer.write_all(self.header().as_bytes())?;
        write_rendered(&mut writer, renderer, self.template.text, &context, &target)?;
        writer.write_all(self.footer().as_bytes())?;
        writer.flush()?;
        drop(writer);

        if self.options.executable {
            set_executable(&target)?;
        }

        Ok(target)
    }
}

fn write_rendered<W: Write>(
    writer: &mut W,
    renderer: &dyn TemplateRenderer,
    template: &str,
    context: &serde_json::Value,
    target: &Path,
) -> Result<()> {
    match renderer.render(template, context) {
        Ok(content) => writer.write_all(content.as_bytes())?,
        Err(e) => warn!("Skipping content of '{}': {}", target.display(), e),
    }
    Ok(())
}

fn guard_case(name: &str) -> String {
    name.chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch.to_ascii_uppercase() } else { '_' })
        .collect()
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions)?;
    Ok(())
}

#[cfg(not(unix))]
fn set_executable(path: &Path) -> Result<()> {
    debug!("Executable bit not supported here, leaving {} as is", path.display());
    Ok(())
}
