// SPDX-License-Identifier: GPL-3.0-or-later

//! Writes the completion script for the requested shell to stdout.
//! Packaging runs this at build time; it is not shipped to users.

use clap_complete::{generate, Shell};
use plankit_config::args;
use std::io;
use std::process::ExitCode;
use std::str::FromStr;

fn main() -> ExitCode {
    let shell_name = match std::env::args().nth(1) {
        Some(name) => name,
        None => {
            eprintln!("usage: generate-completions <shell>");
            return ExitCode::FAILURE;
        }
    };

    let shell = match Shell::from_str(&shell_name) {
        Ok(shell) => shell,
        Err(err) => {
            eprintln!("unknown shell '{shell_name}': {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut command = args::cli();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, &mut io::stdout());
    ExitCode::SUCCESS
}
