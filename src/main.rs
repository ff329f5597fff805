//! source-tpl's main application entry point.
//! Handles command-line argument parsing, option validation and the
//! project generation flow.

use source_tpl::{
    cli::{get_args, Args},
    constants::APP_NAME,
    error::{default_error_handler, Result},
    logger::init_logger,
    project::assemble,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    if args.version {
        println!("{} - version {}", APP_NAME, env!("CARGO_PKG_VERSION"));
        return;
    }

    init_logger(args.verbose, args.quiet);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Validates the command line options
/// 2. Looks up the project assembler and plans every file
/// 3. Creates the directory tree and writes the files
fn run(args: Args) -> Result<()> {
    let options = args.project_options()?;
    let project = assemble(&options, &args.output_dir)?;

    if !args.quiet {
        println!("{project}");
    }

    let renderer = MiniJinjaRenderer::new();
    project.build(&renderer)?;

    if !args.quiet {
        for file in project.files() {
            println!("created: '{}'", file.display());
        }
    }

    Ok(())
}
