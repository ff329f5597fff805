use source_tpl::file::FileKind;
use source_tpl::options::{FileOptions, Language, ProjectKind, ProjectOptions};
use source_tpl::templates::{self, c, cmake, plugin, shell, Template};

fn project(kind: ProjectKind) -> ProjectOptions {
    ProjectOptions::new("widget", "me", Language::C, kind).unwrap()
}

fn select(kind: FileKind, name: &str, project: &ProjectOptions) -> Template {
    templates::select(kind, &FileOptions::new(name, project))
}

#[test]
fn test_application_templates() {
    let app = project(ProjectKind::Application);

    assert_eq!(select(FileKind::Source, "main.c", &app).text, c::MAIN_SOURCE);
    assert_eq!(select(FileKind::Header, "widget.h", &app).text, c::APPLICATION_HEADER);
    assert_eq!(select(FileKind::Header, "widget_def.h", &app).text, c::APPLICATION_DEFINES);
    assert!(select(FileKind::Header, "widget_prt.h", &app).is_empty());
    assert!(select(FileKind::Header, "widget_struct.h", &app).is_empty());
    assert_eq!(select(FileKind::Makefile, "CMakeLists.txt", &app).text, cmake::APPLICATION);
}

#[test]
fn test_library_headers_carry_include_scope() {
    let library = project(ProjectKind::Library);

    let main = select(FileKind::Header, "libwidget.h", &library);
    assert_eq!(main.text, c::LIBRARY_HEADER);
    assert_eq!(main.include_scope, Some("api"));

    let internal = select(FileKind::Header, "internal/internal.h", &library);
    assert_eq!(internal.text, c::LIBRARY_INTERNAL_HEADER);
    assert_eq!(internal.include_scope, Some("internal"));

    assert!(select(FileKind::Header, "api/utils.h", &library).is_empty());
    assert_eq!(select(FileKind::Makefile, "CMakeLists.txt", &library).text, cmake::LIBRARY);
    assert_eq!(select(FileKind::Symbol, "libwidget.sym", &library).text, cmake::SYMBOL);
}

#[test]
fn test_library_error_files_need_libcollections() {
    let library = project(ProjectKind::Library);
    assert!(select(FileKind::Source, "error.c", &library).is_empty());
    assert!(select(FileKind::Header, "internal/error.h", &library).is_empty());

    let library = library.with_libcollections(true);
    assert_eq!(select(FileKind::Source, "error.c", &library).text, c::ERROR_SOURCE);
    assert_eq!(
        select(FileKind::Header, "internal/error.h", &library).text,
        c::INTERNAL_ERROR_HEADER
    );
    assert_eq!(select(FileKind::Header, "api/error.h", &library).text, c::API_ERROR_HEADER);
}

#[test]
fn test_plugin_templates() {
    let c_plugin = project(ProjectKind::XantePlugin);
    assert_eq!(select(FileKind::Source, "plugin.c", &c_plugin).text, plugin::C_SOURCE);
    assert_eq!(select(FileKind::Header, "plugin.h", &c_plugin).text, plugin::C_HEADER);
    assert_eq!(select(FileKind::Makefile, "CMakeLists.txt", &c_plugin).text, cmake::PLUGIN);
    assert_eq!(select(FileKind::Script, "widget", &c_plugin).text, plugin::LAUNCH_SCRIPT);

    let go_plugin =
        ProjectOptions::new("widget", "me", Language::Go, ProjectKind::XantePlugin).unwrap();
    assert_eq!(select(FileKind::GoSource, "plugin.go", &go_plugin).text, plugin::GO_SOURCE);
    assert_eq!(select(FileKind::Makefile, "Makefile", &go_plugin).text, cmake::GO_PLUGIN);
}

#[test]
fn test_package_templates() {
    let app = project(ProjectKind::Application);
    assert!(select(FileKind::Script, "build-package.sh", &app).is_empty());
    assert!(select(FileKind::Text, "widget.service", &app).is_empty());

    let app = app.with_package(true);
    assert_eq!(select(FileKind::Script, "build-package.sh", &app).text, shell::BUILD_PACKAGE);
    assert_eq!(select(FileKind::Text, "widget.service", &app).text, shell::SYSTEMD_SERVICE);
    assert!(select(FileKind::Script, "postinst", &app).is_empty());
}

#[test]
fn test_unknown_basenames_select_nothing() {
    for kind in ProjectKind::ALL {
        let options = project(kind);
        assert_eq!(select(FileKind::Source, "unknown.c", &options), Template::EMPTY);
        assert_eq!(select(FileKind::Header, "unknown.h", &options), Template::EMPTY);
    }
}

#[test]
fn test_selection_is_pure() {
    let library = project(ProjectKind::Library).with_libcollections(true);
    let file = FileOptions::new("api/error.h", &library);

    assert_eq!(
        templates::select(FileKind::Header, &file),
        templates::select(FileKind::Header, &file)
    );
}
