use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure `tee` can report.
///
/// Only [`TeeError::InvalidOption`] ends the invocation. The I/O variants are
/// reported on the diagnostic stream and the run carries on with whatever
/// destinations are still live.
#[derive(Debug, Error)]
pub enum TeeError {
    /// An option token the parser does not recognise.
    #[error("Invalid option: '{0}'")]
    InvalidOption(String),

    /// A destination file could not be opened.
    #[error("{}: cannot open: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    /// Writing a chunk to a destination failed. If closing the sink afterwards
    /// failed too, that error rides along in `suppressed`.
    #[error("{label}: write error: {source}{}", suppressed_suffix(.suppressed))]
    Write {
        label: String,
        source: io::Error,
        suppressed: Option<io::Error>,
    },

    /// Flushing a destination while closing it failed.
    #[error("{label}: close error: {source}")]
    Close { label: String, source: io::Error },

    /// The input stream returned an error; no more input is read.
    #[error("read error: {source}")]
    Read { source: io::Error },
}

impl TeeError {
    /// The destination label or path this error is about, if any.
    pub fn label(&self) -> Option<String> {
        match self {
            TeeError::Open { path, .. } => Some(path.display().to_string()),
            TeeError::Write { label, .. } | TeeError::Close { label, .. } => Some(label.clone()),
            TeeError::InvalidOption(_) | TeeError::Read { .. } => None,
        }
    }
}

fn suppressed_suffix(suppressed: &Option<io::Error>) -> String {
    match suppressed {
        Some(e) => format!(" (close also failed: {})", e),
        None => String::new(),
    }
}
