// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::{anyhow, Context as AnyhowContext, Result};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// Application context containing runtime environment information.
///
/// This struct captures the filesystem location of the running executable
/// at startup. The package installs its payload next to the entry point,
/// so the executable's directory is the base for every directory lookup.
#[derive(Debug, Clone)]
pub struct Context {
    /// Path to the current executable
    pub current_executable: PathBuf,
    /// Directory the package was installed into
    pub install_root: PathBuf,
}

impl Context {
    /// Capture the current application context.
    ///
    /// This function performs I/O operations to locate the running
    /// executable and should be called early in the application
    /// lifecycle, before any lookup is attempted.
    pub fn capture() -> Result<Self> {
        let current_executable =
            env::current_exe().with_context(|| "Failed to get current executable path")?;

        let install_root = current_executable
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                anyhow!("Executable path has no parent directory: {}", current_executable.display())
            })?;

        Ok(Context { current_executable, install_root })
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Installation root: {} (executable: {})",
            self.install_root.display(),
            self.current_executable.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_capture() {
        let context = Context::capture();
        assert!(context.is_ok());

        let ctx = context.unwrap();

        // Basic assertions that should always be true
        assert!(ctx.current_executable.is_absolute());
        assert!(ctx.install_root.is_absolute());
        assert!(ctx.current_executable.starts_with(&ctx.install_root));
    }

    #[test]
    fn test_display_format() {
        let context = Context::capture().unwrap();
        let display_output = format!("{}", context);

        assert!(display_output.contains("Installation root:"));
        assert!(display_output.contains("executable:"));
    }
}
