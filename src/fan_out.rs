//! The copy loop: one reader, many writers.
//!
//! Input is read in fixed-size chunks and every chunk goes to each live
//! destination in list order before the next read. A destination that fails
//! a write is closed and dropped for good; the others keep receiving data.
//! Whatever is still live when the loop ends is closed by a scope guard, so
//! sinks are released on EOF, on a read error and on unwind alike.

use std::io::{self, Read, Write};

use scopeguard::guard;
use tracing::{debug, trace};

use crate::destination::Destination;
use crate::error::TeeError;

/// Size of each read from the input stream.
pub const CHUNK_SIZE: usize = 4096;

/// What happened during a copy.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopyReport {
    /// Bytes taken from the input stream.
    pub bytes_read: u64,
    /// Labels of destinations dropped after a write failure, in drop order.
    pub removed: Vec<String>,
    /// Whether the copy stopped because the input stream failed.
    pub read_error: bool,
}

/// Copies `input` to every destination until EOF or a read error.
///
/// Consumes `destinations`; all of them are closed before this returns.
/// Every failure is written as one line to `diag`. When the last destination
/// has been dropped the input is still drained to EOF.
pub fn fan_out<R: Read>(
    mut input: R,
    destinations: Vec<Destination>,
    diag: &mut dyn Write,
) -> CopyReport {
    let mut report = CopyReport::default();
    let mut buf = [0u8; CHUNK_SIZE];

    let mut live = guard((destinations, &mut *diag), |(destinations, diag)| {
        close_all(destinations, diag)
    });
    let (destinations, diag) = &mut *live;

    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                debug!(bytes_read = report.bytes_read, "input failed, stopping copy");
                crate::report(&mut **diag, &TeeError::Read { source });
                report.read_error = true;
                break;
            }
        };
        report.bytes_read += n as u64;
        trace!(bytes = n, live = destinations.len(), "chunk");
        deliver(&buf[..n], destinations, &mut **diag, &mut report.removed);
    }

    report
}

/// Writes `chunk` to each destination, dropping the ones that fail.
fn deliver(
    chunk: &[u8],
    destinations: &mut Vec<Destination>,
    diag: &mut dyn Write,
    removed: &mut Vec<String>,
) {
    let mut i = 0;
    while i < destinations.len() {
        match destinations[i].write_chunk(chunk) {
            Ok(()) => i += 1,
            Err(e) => {
                let failed = destinations.remove(i);
                debug!(label = failed.label(), "dropping destination after write error");
                removed.push(failed.label().to_string());
                crate::report(diag, &failed.discard(e));
            }
        }
    }
}

/// Closes every destination, reporting each failure. One failing close never
/// stops the others.
pub fn close_all(destinations: Vec<Destination>, diag: &mut dyn Write) {
    debug!(live = destinations.len(), "closing destinations");
    for dest in destinations {
        if let Err(e) = dest.close() {
            crate::report(diag, &e);
        }
    }
}
