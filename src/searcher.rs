use anyhow::{bail, Context, Result};
use std::{path::Path, process::Command};

const RG_EXECUTABLE: &str = "rg";

/// Fails fast when ripgrep is not installed, before any work is done.
pub fn check_availability() -> Result<()> {
    which::which(RG_EXECUTABLE).map(|_| ()).with_context(|| {
        format!("could not find executable '{RG_EXECUTABLE}'; please install ripgrep using your package manager")
    })
}

/// Runs `rg -n <pattern> <path>` and returns its stdout.
///
/// ripgrep exits with 1 when nothing matched; that is an empty result,
/// not a failure. Any other non-zero exit is fatal.
pub fn run(pattern: &str, path: &Path) -> Result<String> {
    let output = Command::new(RG_EXECUTABLE)
        .arg("-n")
        .arg(pattern)
        .arg(path)
        .output()
        .with_context(|| format!("failed to run '{RG_EXECUTABLE}'"))?;

    if !output.status.success() && output.status.code() != Some(1) {
        bail!(
            "'{RG_EXECUTABLE}' failed ({}): {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    String::from_utf8(output.stdout)
        .with_context(|| format!("'{RG_EXECUTABLE}' produced non-UTF-8 output"))
}
