use crate::editor::Editor;
use crate::results::{self, MatchRecord};
use anyhow::{Context, Result};
use std::io::Write;
use tempfile::NamedTempFile;

const SCRATCH_PREFIX: &str = ".rgrev";

/// Stages the rendered results in a scratch file and blocks on the editor.
///
/// The file lives in the current directory so relative paths in the
/// results stay meaningful from inside the editor. Dropping the
/// `NamedTempFile` removes it on every exit path. The editor's exit
/// status is deliberately ignored; only a failed launch is an error.
pub fn review_in_editor(records: &[MatchRecord], editor: Editor) -> Result<()> {
    let mut scratch = tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .tempfile_in(".")
        .context("failed to create scratch file")?;

    write_results(&mut scratch, records)?;

    let mut child = editor.spawn(scratch.path())?;
    child.wait().context("failed to wait for editor")?;

    Ok(())
}

fn write_results(scratch: &mut NamedTempFile, records: &[MatchRecord]) -> Result<()> {
    scratch
        .write_all(results::render(records).as_bytes())
        .and_then(|()| scratch.flush())
        .context("failed to write scratch file")
}
