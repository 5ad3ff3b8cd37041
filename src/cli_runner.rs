//! Runs one `tee` invocation against the real process streams.

use std::ffi::OsStr;
use std::io::{self, Write};
use std::process::ExitCode;

use tracing::debug;

use crate::cli::{self, Invocation};
use crate::destination::{self, Destination};
use crate::error::TeeError;
use crate::fan_out::fan_out;

/// Parses `args` (program name excluded) and carries out the request.
///
/// Returns failure only for an invalid option. Open, write, close and read
/// problems are reported on stderr but the run itself still succeeds.
pub fn run_cli_app<I, S>(args: I) -> ExitCode
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let invocation = cli::parse(args);
    debug!(?invocation, "parsed arguments");

    match invocation {
        Invocation::Help => {
            println!("{}", cli::HELP);
            ExitCode::SUCCESS
        }
        Invocation::Version => {
            println!("{}", cli::version_line());
            ExitCode::SUCCESS
        }
        Invocation::Invalid { token } => {
            let stderr = io::stderr();
            let mut err = stderr.lock();
            let _ = writeln!(err, "{}", TeeError::InvalidOption(token));
            let _ = writeln!(err, "{}", cli::HELP_HINT);
            ExitCode::FAILURE
        }
        Invocation::Run { append, files } => {
            let stderr = io::stderr();
            let mut diag = stderr.lock();
            let destinations = destination::open_all(Destination::stdout(), &files, append, &mut diag);
            let report = fan_out(io::stdin().lock(), destinations, &mut diag);
            debug!(
                bytes_read = report.bytes_read,
                removed = report.removed.len(),
                read_error = report.read_error,
                "copy finished"
            );
            ExitCode::SUCCESS
        }
    }
}
