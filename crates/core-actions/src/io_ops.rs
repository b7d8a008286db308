//! File IO helpers: loading a path into rows and writing rows back.
//!
//! Loading is fatal on any error except a missing file, which opens an empty
//! document bound to that name. Saving never is: failures become a status
//! message and the document stays dirty.

use crate::{Editor, FatalError, NoObserver};
use core_input::ByteSource;
use core_state::Document;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SAVE_AS_PROMPT: &str = "Save as: {} (ESC to cancel)";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Read `path` as lines with trailing `\n` / `\r` removed.
pub fn load(path: &Path) -> io::Result<Vec<Vec<u8>>> {
    let bytes = fs::read(path)?;
    Ok(bytes
        .split_inclusive(|&b| b == b'\n')
        .map(|line| {
            let end = line
                .iter()
                .rposition(|&b| b != b'\n' && b != b'\r')
                .map_or(0, |i| i + 1);
            line[..end].to_vec()
        })
        .collect())
}

/// Build the startup document for `path`.
pub fn open_document(path: &Path) -> io::Result<Document> {
    match load(path) {
        Ok(lines) => {
            tracing::info!(target: "io", path = %path.display(), rows = lines.len(), "file_opened");
            Ok(Document::from_lines(lines, Some(path.to_path_buf())))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(target: "io", path = %path.display(), "new_file");
            Ok(Document::from_lines(Vec::<Vec<u8>>::new(), Some(path.to_path_buf())))
        }
        Err(e) => {
            tracing::error!(target: "io", path = %path.display(), error = %e, "file_open_error");
            Err(e)
        }
    }
}

/// Write every line followed by `\n`. The file is created with mode 0644 if
/// missing and cut to the exact new length before writing. Returns the byte
/// count written.
pub fn save<'a, I>(path: &Path, lines: I) -> Result<usize, SaveError>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut buf = Vec::new();
    for line in lines {
        buf.extend_from_slice(line);
        buf.push(b'\n');
    }
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .mode(0o644)
        .open(path)?;
    file.set_len(buf.len() as u64)?;
    file.write_all(&buf)?;
    Ok(buf.len())
}

impl<S: ByteSource, W: Write> Editor<S, W> {
    /// Save the document, asking for a name first if it has none.
    pub fn save(&mut self) -> Result<(), FatalError> {
        let existing = self.state.document.filename().map(Path::to_path_buf);
        let path = match existing {
            Some(p) => p,
            None => match self.prompt(SAVE_AS_PROMPT, &mut NoObserver)? {
                Some(name) => {
                    self.state.document.set_filename(&name);
                    PathBuf::from(name)
                }
                None => {
                    self.state.set_status("Save aborted");
                    return Ok(());
                }
            },
        };
        match save(&path, self.state.document.lines()) {
            Ok(n) => {
                self.state.document.mark_clean();
                self.state.set_status(format!("{n} bytes written to disk"));
                tracing::info!(target: "io", path = %path.display(), bytes = n, "file_saved");
            }
            Err(e) => {
                self.state.set_status(format!("Can't save! I/O error: {e}"));
                tracing::warn!(target: "io", path = %path.display(), error = %e, "save_failed");
            }
        }
        Ok(())
    }
}
