// SPDX-License-Identifier: GPL-3.0-or-later

use plankit_config::{args, context, layout};
use std::process::ExitCode;

/// Driver function of the application.
fn main() -> ExitCode {
    // Initialize the logging system.
    env_logger::init();
    // Get the package name and version from Cargo
    let pkg_name = env!("CARGO_PKG_NAME");
    let pkg_version = env!("CARGO_PKG_VERSION");
    log::info!("{pkg_name} v{pkg_version}");

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{pkg_name}: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    // Capture application context.
    let context = context::Context::capture()?;
    log::info!("{context}");
    // Parse the command line arguments.
    let matches = args::cli().get_matches();
    let arguments = args::Arguments::from(matches);
    log::info!("{arguments}");

    // Asking for nothing prints the help text and is not an error.
    if arguments.is_empty() {
        args::cli().print_help()?;
        return Ok(ExitCode::SUCCESS);
    }

    if arguments.includedir {
        let path = layout::include_dir(&context.install_root)?;
        log::debug!("Resolved header directory: {}", path.display());
        println!("{}", path.display());
    }
    if arguments.cmakedir {
        let path = layout::cmake_dir(&context.install_root)?;
        log::debug!("Resolved CMake module directory: {}", path.display());
        println!("{}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}
