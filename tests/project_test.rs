use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, TimeZone};
use source_tpl::error::Error;
use source_tpl::options::{Language, ProjectKind, ProjectOptions};
use source_tpl::project::{assemble, ProjectFactory, Registry};
use source_tpl::renderer::MiniJinjaRenderer;
use tempfile::TempDir;
use walkdir::WalkDir;

fn options(kind: ProjectKind, language: Language) -> ProjectOptions {
    let timestamp = Local.with_ymd_and_hms(2017, 3, 4, 10, 20, 30).unwrap();
    ProjectOptions::new("widget", "Jane Doe", language, kind)
        .unwrap()
        .with_timestamp(timestamp)
}

fn generate(options: &ProjectOptions, base_dir: &Path) -> Vec<PathBuf> {
    let project = assemble(options, base_dir).unwrap();
    project.build(&MiniJinjaRenderer::new()).unwrap();
    project.files()
}

/// Every regular file under `dir`, relative to it, sorted.
fn list_files(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(dir)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

fn sorted(files: &[&str]) -> Vec<String> {
    let mut files: Vec<String> = files.iter().map(|file| file.to_string()).collect();
    files.sort();
    files
}

#[test_log::test]
fn test_library_files() {
    let temp_dir = TempDir::new().unwrap();
    let files = generate(&options(ProjectKind::Library, Language::C), temp_dir.path());

    let expected = sorted(&[
        "libwidget/src/utils.c",
        "libwidget/src/error.c",
        "libwidget/include/libwidget.h",
        "libwidget/include/internal/internal.h",
        "libwidget/include/internal/utils.h",
        "libwidget/include/internal/error.h",
        "libwidget/include/api/utils.h",
        "libwidget/include/api/error.h",
        "libwidget/misc/libwidget.sym",
        "libwidget/CMakeLists.txt",
    ]);

    assert_eq!(list_files(temp_dir.path()), expected);
    assert_eq!(files.len(), expected.len());
    assert!(files.iter().all(|file| file.is_file()));
}

#[test]
fn test_library_headers_have_one_guard() {
    let temp_dir = TempDir::new().unwrap();
    let files = generate(&options(ProjectKind::Library, Language::C), temp_dir.path());

    let headers: Vec<_> = files
        .iter()
        .filter(|file| file.extension().is_some_and(|ext| ext == "h"))
        .collect();
    assert_eq!(headers.len(), 6);

    for header in headers {
        let content = fs::read_to_string(header).unwrap();
        let guards = content.lines().filter(|line| line.starts_with("#ifndef _LIB")).count();
        let defines = content.lines().filter(|line| line.starts_with("#define _LIB")).count();

        assert_eq!(guards, 1, "{}", header.display());
        assert_eq!(defines, 1, "{}", header.display());
        assert!(content.trim_end().ends_with("#endif"), "{}", header.display());
    }

    let main = fs::read_to_string(temp_dir.path().join("libwidget/include/libwidget.h")).unwrap();
    assert!(main.contains("#ifndef _LIBWIDGET_H"));
    assert!(main.contains("#include \"api/utils.h\""));
    assert!(main.contains("#include \"api/error.h\""));

    let internal =
        fs::read_to_string(temp_dir.path().join("libwidget/include/internal/internal.h")).unwrap();
    assert!(internal.contains("#ifndef _LIBWIDGET_INTERNAL_INTERNAL_H"));
    assert!(internal.contains("#include \"internal/utils.h\""));
}

#[test]
fn test_library_sources_include_main_header() {
    let temp_dir = TempDir::new().unwrap();
    generate(&options(ProjectKind::Library, Language::C), temp_dir.path());

    for module in ["utils", "error"] {
        let path = temp_dir.path().join(format!("libwidget/src/{module}.c"));
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("#include \"libwidget.h\""));
    }

    let cmake = fs::read_to_string(temp_dir.path().join("libwidget/CMakeLists.txt")).unwrap();
    assert!(cmake.contains("project(libwidget)"));
}

#[test]
fn test_application_files() {
    let temp_dir = TempDir::new().unwrap();
    generate(&options(ProjectKind::Application, Language::C), temp_dir.path());

    let expected = sorted(&[
        "widget/src/main.c",
        "widget/include/widget.h",
        "widget/include/widget_def.h",
        "widget/include/widget_prt.h",
        "widget/include/widget_struct.h",
        "widget/CMakeLists.txt",
    ]);
    assert_eq!(list_files(temp_dir.path()), expected);

    let main = fs::read_to_string(temp_dir.path().join("widget/src/main.c")).unwrap();
    assert!(main.contains("Author: Jane Doe"));
    assert!(main.contains("#include \"widget.h\""));
}

#[test]
fn test_single_source_and_header() {
    let temp_dir = TempDir::new().unwrap();
    generate(&options(ProjectKind::SingleSource, Language::C), temp_dir.path());
    generate(&options(ProjectKind::SingleHeader, Language::C), temp_dir.path());

    assert_eq!(list_files(temp_dir.path()), sorted(&["widget.c", "widget.h"]));

    let header = fs::read_to_string(temp_dir.path().join("widget.h")).unwrap();
    assert!(header.contains("#ifndef _WIDGET_H"));
    assert!(header.ends_with("\n#endif\n"));
}

#[test]
fn test_go_plugin_files() {
    let temp_dir = TempDir::new().unwrap();
    generate(&options(ProjectKind::XantePlugin, Language::Go), temp_dir.path());

    assert_eq!(
        list_files(temp_dir.path()),
        sorted(&["widget/src/plugin.go", "widget/Makefile", "widget/script/widget"])
    );
    assert!(!temp_dir.path().join("widget/include").exists());
}

#[test]
fn test_c_plugin_files() {
    let temp_dir = TempDir::new().unwrap();
    generate(&options(ProjectKind::XantePlugin, Language::C), temp_dir.path());

    assert_eq!(
        list_files(temp_dir.path()),
        sorted(&[
            "widget/src/plugin.c",
            "widget/include/plugin.h",
            "widget/CMakeLists.txt",
            "widget/script/widget",
        ])
    );
}

#[test_log::test]
fn test_packaged_application() {
    let temp_dir = TempDir::new().unwrap();
    let options = options(ProjectKind::Application, Language::C).with_package(true);
    generate(&options, temp_dir.path());

    let files = list_files(temp_dir.path());
    for expected in [
        "package-widget/widget/src/main.c",
        "package-widget/widget/CMakeLists.txt",
        "package-widget/pkg_install/debian/preinst",
        "package-widget/pkg_install/debian/prerm",
        "package-widget/pkg_install/debian/postinst",
        "package-widget/pkg_install/debian/postrm",
        "package-widget/pkg_install/misc/widget.service",
        "package-widget/pkg_install/build-package.sh",
    ] {
        assert!(files.contains(&expected.to_string()), "missing {expected}");
    }
    assert_eq!(files.len(), 12);

    let service = fs::read_to_string(
        temp_dir.path().join("package-widget/pkg_install/misc/widget.service"),
    )
    .unwrap();
    assert!(service.contains("ExecStart=/usr/local/bin/widget"));
}

#[test]
fn test_rebuild_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let options = options(ProjectKind::Application, Language::C);

    generate(&options, temp_dir.path());
    let main = temp_dir.path().join("widget/src/main.c");
    fs::write(&main, "edited").unwrap();

    generate(&options, temp_dir.path());
    assert_ne!(fs::read_to_string(main).unwrap(), "edited");
}

#[test]
fn test_builds_are_reproducible() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let options = options(ProjectKind::Library, Language::C).with_libcollections(true);

    generate(&options, first.path());
    generate(&options, second.path());

    assert!(!dir_diff::is_different(first.path(), second.path()).unwrap());
}

#[test]
fn test_unregistered_kind() {
    let temp_dir = TempDir::new().unwrap();
    let registry = Registry::new(Vec::<(ProjectKind, ProjectFactory)>::new());
    let options = options(ProjectKind::Library, Language::C);

    let result = registry.assemble(&options, temp_dir.path());
    assert!(matches!(result, Err(Error::UnimplementedProject(ProjectKind::Library))));
    assert!(list_files(temp_dir.path()).is_empty());
}

#[test]
fn test_planning_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let project = assemble(&options(ProjectKind::Library, Language::C), temp_dir.path()).unwrap();

    assert_eq!(project.files().len(), 10);
    assert!(project.directories().iter().all(|dir| !dir.exists()));
}

#[test]
fn test_application_derived_names() {
    let temp_dir = TempDir::new().unwrap();
    let timestamp = Local.with_ymd_and_hms(2017, 3, 4, 10, 20, 30).unwrap();
    let options = ProjectOptions::new("my-app_2", "me", Language::C, ProjectKind::Application)
        .unwrap()
        .with_timestamp(timestamp);
    generate(&options, temp_dir.path());

    let expected = sorted(&[
        "my-app_2/src/main.c",
        "my-app_2/include/my-app_2.h",
        "my-app_2/include/my-app_2_def.h",
        "my-app_2/include/my-app_2_prt.h",
        "my-app_2/include/my-app_2_struct.h",
        "my-app_2/CMakeLists.txt",
    ]);
    assert_eq!(list_files(temp_dir.path()), expected);

    let include = temp_dir.path().join("my-app_2/include");
    let header = fs::read_to_string(include.join("my-app_2.h")).unwrap();
    assert!(header.contains("#ifndef _MY_APP_2_H"));
    assert!(header.contains("#include \"my-app_2_def.h\""));

    let defines = fs::read_to_string(include.join("my-app_2_def.h")).unwrap();
    assert!(defines.contains("#ifndef _MY_APP_2_DEF_H"));
    assert!(defines.contains("#define APP_NAME                \"my-app_2\""));
}

#[test]
fn test_dotted_names_are_rejected() {
    let result = ProjectOptions::new("my.app", "me", Language::C, ProjectKind::Application);
    assert!(matches!(result, Err(Error::ValidationError(_))));

    let result = ProjectOptions::new("my.plugin", "me", Language::Go, ProjectKind::XantePlugin);
    assert!(matches!(result, Err(Error::ValidationError(_))));
}

#[test]
fn test_libcollections_library() {
    let temp_dir = TempDir::new().unwrap();
    let options = options(ProjectKind::Library, Language::C).with_libcollections(true);
    generate(&options, temp_dir.path());

    let root = temp_dir.path().join("libwidget");
    let read = |path: &str| fs::read_to_string(root.join(path)).unwrap();

    let main = read("include/libwidget.h");
    assert!(main.contains("#ifndef _COLLECTIONS_H\n# include <collections.h>\n#endif"));
    assert!(main.trim_end().ends_with("#endif"));

    let cmake = read("CMakeLists.txt");
    assert!(cmake.contains("target_link_libraries(${PROJECT_NAME} collections)"));

    let error = read("src/error.c");
    assert!(error.contains("#include \"libwidget.h\""));
    assert!(error.contains("e->error = WIDGET_NO_ERROR;"));
    assert!(error.contains("const char *widget_strerror(enum widget_error_code code)"));
    assert!(error.contains("if (code >= WIDGET_MAX_ERROR_CODE)"));

    let internal = read("include/internal/error.h");
    assert!(internal.contains("#ifndef _LIBWIDGET_INTERNAL_ERROR_H"));
    assert!(internal.contains("enum widget_error_code {"));
    assert!(internal.contains("WIDGET_NO_ERROR,"));

    let api = read("include/api/error.h");
    assert!(api.contains("#ifndef _LIBWIDGET_API_ERROR_H"));
    assert!(api.contains("const char *widget_strerror(enum widget_error_code code);"));
}

#[test]
fn test_libcollections_application() {
    let temp_dir = TempDir::new().unwrap();
    let options = options(ProjectKind::Application, Language::C).with_libcollections(true);
    generate(&options, temp_dir.path());

    let header = fs::read_to_string(temp_dir.path().join("widget/include/widget.h")).unwrap();
    assert!(header.contains("\n#include <collections.h>\n"));

    let cmake = fs::read_to_string(temp_dir.path().join("widget/CMakeLists.txt")).unwrap();
    assert!(cmake.contains("target_link_libraries(${PROJECT_NAME} collections)"));
}

#[test]
fn test_without_libcollections() {
    let temp_dir = TempDir::new().unwrap();
    generate(&options(ProjectKind::Library, Language::C), temp_dir.path());

    let main = fs::read_to_string(temp_dir.path().join("libwidget/include/libwidget.h")).unwrap();
    assert!(!main.contains("collections.h"));

    let error = fs::read_to_string(temp_dir.path().join("libwidget/src/error.c")).unwrap();
    assert!(!error.contains("strerror"));
}
