//! # tee
//!
//! Copies standard input to standard output and to any number of files.
//!
//! The library side is split so that the copy loop can be driven with any
//! reader and any set of sinks, which is how the tests exercise it.
//!
//! ## Key Modules
//!
//! - [`cli`]: turns the argument list into an [`cli::Invocation`].
//! - [`destination`]: labelled sinks and the open phase.
//! - [`fan_out`]: the chunked copy loop and guaranteed teardown.
//! - [`cli_runner`]: wires the pieces together for the `tee` binary.
//! - [`logging`]: `tracing` subscriber setup.

use std::io::Write;

pub mod cli;
pub mod cli_runner;
pub mod destination;
pub mod error;
pub mod fan_out;
pub mod logging;

pub use destination::Destination;
pub use error::TeeError;
pub use fan_out::{fan_out, CopyReport};

/// Writes one diagnostic line for `err`.
///
/// A failure to write the diagnostic itself is ignored: there is nowhere
/// left to report it.
pub fn report(diag: &mut dyn Write, err: &TeeError) {
    let _ = writeln!(diag, "tee: {}", err);
}
