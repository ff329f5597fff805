//! Logger setup for the command line application.

/// Initializes env_logger. `--verbose` shows debug messages, `--quiet`
/// keeps only errors; warnings are shown otherwise.
pub fn init_logger(verbose: bool, quiet: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else if quiet {
            log::LevelFilter::Error
        } else {
            log::LevelFilter::Warn
        })
        .init();
}
