// SPDX-License-Identifier: GPL-3.0-or-later

//! This module contains the command line interface of the application.
//!
//! The command line parsing is implemented using the `clap` library.
//! The module is defining a type to represent a structured form of the
//! program invocation. The `Arguments` type captures which of the
//! installed directories the caller asked for.

use clap::{arg, command, ArgAction, ArgMatches, Command};
use std::fmt;

/// Represents the command line arguments of the application.
#[derive(Debug, PartialEq)]
pub struct Arguments {
    // Print the header directory path.
    pub includedir: bool,
    // Print the CMake module directory path.
    pub cmakedir: bool,
}

impl Arguments {
    /// True when the invocation did not ask for any directory.
    pub fn is_empty(&self) -> bool {
        !self.includedir && !self.cmakedir
    }
}

impl From<ArgMatches> for Arguments {
    fn from(matches: ArgMatches) -> Self {
        let includedir = matches.get_flag("includedir");
        let cmakedir = matches.get_flag("cmakedir");
        Arguments { includedir, cmakedir }
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Requested: includedir={}, cmakedir={}", self.includedir, self.cmakedir)
    }
}

/// Represents the command line interface of the application.
///
/// The two directory queries are plain flags and can be combined in a
/// single invocation. The output order is fixed and does not depend on
/// the flag order. Asking for nothing is not an error; the binary
/// prints the help text in that case.
pub fn cli() -> Command {
    command!().args(&[
        arg!(--includedir "Print the directory holding the installed headers")
            .action(ArgAction::SetTrue),
        arg!(--cmakedir "Print the directory holding the installed CMake modules")
            .action(ArgAction::SetTrue),
    ])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_includedir_call() {
        let execution = vec!["plankit-config", "--includedir"];

        let matches = cli().get_matches_from(execution);
        let arguments = Arguments::from(matches);

        assert_eq!(arguments, Arguments { includedir: true, cmakedir: false });
    }

    #[test]
    fn test_cmakedir_call() {
        let execution = vec!["plankit-config", "--cmakedir"];

        let matches = cli().get_matches_from(execution);
        let arguments = Arguments::from(matches);

        assert_eq!(arguments, Arguments { includedir: false, cmakedir: true });
    }

    #[test]
    fn test_combined_call() {
        let execution = vec!["plankit-config", "--cmakedir", "--includedir"];

        let matches = cli().get_matches_from(execution);
        let arguments = Arguments::from(matches);

        assert_eq!(arguments, Arguments { includedir: true, cmakedir: true });
    }

    #[test]
    fn test_empty_call() {
        let execution = vec!["plankit-config"];

        let matches = cli().get_matches_from(execution);
        let arguments = Arguments::from(matches);

        assert_eq!(arguments, Arguments { includedir: false, cmakedir: false });
        assert!(arguments.is_empty());
    }

    #[test]
    fn test_unknown_flag() {
        let execution = vec!["plankit-config", "--libdir"];

        let result = cli().try_get_matches_from(execution);

        assert!(result.is_err());
    }
}
