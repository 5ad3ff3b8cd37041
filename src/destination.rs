//! Destinations: labelled sinks that receive a copy of every input chunk.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::TeeError;

/// Label of the standard output destination.
pub const STDOUT_LABEL: &str = "stdout";

/// A named, open sink.
pub struct Destination {
    label: String,
    sink: Box<dyn Write>,
}

impl Destination {
    pub fn new(label: impl Into<String>, sink: Box<dyn Write>) -> Self {
        Destination { label: label.into(), sink }
    }

    /// The process's standard output.
    pub fn stdout() -> Self {
        Destination::new(STDOUT_LABEL, Box::new(io::stdout().lock()))
    }

    /// Opens `path` for writing, creating it if needed.
    ///
    /// With `append` the existing content is kept and new bytes go after it,
    /// otherwise the file is truncated. The handle is buffered.
    pub fn open(path: &Path, append: bool) -> Result<Self, TeeError> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)
            .map_err(|source| TeeError::Open { path: path.to_path_buf(), source })?;
        Ok(Destination::new(path.display().to_string(), Box::new(BufWriter::new(file))))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Writes the whole chunk.
    pub fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.sink.write_all(chunk)
    }

    /// Flushes and releases the sink.
    pub fn close(self) -> Result<(), TeeError> {
        let (label, flushed) = self.release();
        flushed.map_err(|source| TeeError::Close { label, source })
    }

    /// Closes a destination after `error` was hit while writing to it.
    /// A close failure is attached to the write error rather than reported
    /// on its own.
    pub fn discard(self, error: io::Error) -> TeeError {
        let (label, flushed) = self.release();
        TeeError::Write { label, source: error, suppressed: flushed.err() }
    }

    fn release(mut self) -> (String, io::Result<()>) {
        let flushed = self.sink.flush();
        let Destination { label, sink } = self;
        drop(sink);
        (label, flushed)
    }
}

impl std::fmt::Debug for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Destination").field("label", &self.label).finish_non_exhaustive()
    }
}

/// Builds the live destination list: `first`, then every file in `files` in
/// order.
///
/// A file that cannot be opened is reported on `diag` and left out; the rest
/// are still attempted.
pub fn open_all(
    first: Destination,
    files: &[PathBuf],
    append: bool,
    diag: &mut dyn Write,
) -> Vec<Destination> {
    let mut destinations = Vec::with_capacity(files.len() + 1);
    destinations.push(first);
    for path in files {
        match Destination::open(path, append) {
            Ok(dest) => {
                debug!(label = dest.label(), append, "opened destination");
                destinations.push(dest);
            }
            Err(e) => crate::report(diag, &e),
        }
    }
    destinations
}
