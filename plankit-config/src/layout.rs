// SPDX-License-Identifier: GPL-3.0-or-later

//! Layout of the installed package tree.
//!
//! The package places the public headers and the CMake integration
//! modules in fixed subdirectories below the installation root. This
//! module resolves those subdirectories and verifies that they are
//! present on disk before handing the path to the caller.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The directory name holding the native core distribution.
pub const CORE_DIR_NAME: &str = "core";

/// The directory name holding the public headers, below the core directory.
pub const INCLUDE_DIR_NAME: &str = "include";

/// The directory name holding the CMake integration modules.
pub const CMAKE_DIR_NAME: &str = "cmake";

/// A directory expected by the installed layout is not on disk. This
/// signals a broken or incomplete installation; there is no recovery
/// short of reinstalling the package.
#[derive(Debug, Error)]
pub enum InstallationError {
    #[error("the package is not installed correctly: missing {}", .0.display())]
    MissingDirectory(PathBuf),
}

/// Path to the directory holding the installed headers.
pub fn include_dir(root: &Path) -> Result<PathBuf, InstallationError> {
    resolve(root.join(CORE_DIR_NAME).join(INCLUDE_DIR_NAME))
}

/// Path to the directory holding the installed CMake modules.
pub fn cmake_dir(root: &Path) -> Result<PathBuf, InstallationError> {
    resolve(root.join(CMAKE_DIR_NAME))
}

/// Hand out the candidate path only if it is present on disk.
fn resolve(candidate: PathBuf) -> Result<PathBuf, InstallationError> {
    if candidate.exists() {
        Ok(candidate)
    } else {
        Err(InstallationError::MissingDirectory(candidate))
    }
}
