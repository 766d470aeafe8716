//! Amend the current commit through the `git` binary.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{RbError, Result};
use crate::trailer::Trailer;

/// Amend HEAD in the current directory, inserting the trailer.
///
/// The rewrite goes through `git commit --amend` with `GIT_EDITOR`
/// replaced by `git interpret-trailers --in-place`, so git itself
/// handles trailer placement and deduplication within the message.
pub fn amend_with_trailer(trailer: &Trailer<'_>) -> Result<()> {
    amend_in(Path::new("."), trailer)
}

fn amend_in(repo: &Path, trailer: &Trailer<'_>) -> Result<()> {
    let editor = format!("git interpret-trailers --trailer \"{trailer}\" --in-place");
    debug!(%editor, "amending HEAD");

    let status = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(["commit", "--amend"])
        .env("GIT_EDITOR", editor)
        .status()
        .map_err(RbError::GitSpawn)?;

    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(RbError::GitExit(code)),
        None => Err(RbError::GitKilled),
    }
}
