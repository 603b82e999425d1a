//! Puts the rendered document on disk.
//!
//! Writes go through a temp file in the destination directory followed by a
//! rename, so a failure partway through a write never leaves a truncated
//! `paper.tex` behind and never clobbers a previous run's output.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

/// Where the document lands, relative to the working directory.
pub const OUTPUT_FILENAME: &str = "paper.tex";

/// Writes `contents` to `path`, replacing any existing file.
///
/// # Errors
///
/// Fails when the destination directory is missing or unwritable, or when
/// the write or rename itself fails.
pub fn write_document(path: impl AsRef<Path>, contents: &str) -> io::Result<()> {
    let path = path.as_ref();
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| err.error)?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote document");
    Ok(())
}
