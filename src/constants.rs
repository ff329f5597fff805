//! Common constants used throughout the source-tpl application.

/// Application name, as printed by `--version`.
pub const APP_NAME: &str = "source-tpl";

/// Prefix of the root directory created when packaging is requested.
pub const PACKAGE_PREFIX: &str = "package-";

/// Prefix prepended to library project names.
pub const LIBRARY_PREFIX: &str = "lib";

/// Modules every library project is split into. Each one gets a source
/// file plus an api and an internal header.
pub const LIBRARY_MODULES: [&str; 2] = ["utils", "error"];

/// Suffixes of the auxiliary headers of an application project.
pub const APPLICATION_HEADER_SUFFIXES: [&str; 3] = ["_def", "_prt", "_struct"];

/// Debian maintainer scripts generated inside a package.
pub const DEBIAN_SCRIPTS: [&str; 4] = ["preinst", "prerm", "postinst", "postrm"];

/// Package build script name.
pub const BUILD_SCRIPT: &str = "build-package.sh";

/// Directory names of the generated tree.
pub const SOURCE_DIR: &str = "src";
pub const INCLUDE_DIR: &str = "include";
pub const API_DIR: &str = "api";
pub const INTERNAL_DIR: &str = "internal";
pub const MISC_DIR: &str = "misc";
pub const SCRIPT_DIR: &str = "script";
pub const PACKAGE_DIR: &str = "pkg_install";
pub const DEBIAN_DIR: &str = "debian";

/// Environment variable consulted for the author name.
pub const AUTHOR_ENV: &str = "SOURCE_TPL_AUTHOR";
