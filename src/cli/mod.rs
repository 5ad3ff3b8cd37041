//! Command-line parsing for `tee`.
//!
//! The option set is tiny and has exact reporting rules (a bad flag inside a
//! cluster like `-ax` is reported as `-x`, not as the whole token), so parsing
//! is a small hand-written state machine instead of a general-purpose parser.

use std::ffi::OsStr;
use std::path::PathBuf;

/// Version reported by `--version`.
pub const VERSION: &str = "1.0";

/// Text printed by `--help`.
pub const HELP: &str = "Usage: tee [OPTION]... [FILE]...
Copy standard input to each FILE, and also to standard output.

  -a, --append              append to the given FILEs, do not overwrite
      --help     display this help and exit
      --version  output version information and exit";

/// Hint printed after an invalid option.
pub const HELP_HINT: &str = "Try 'tee --help' for more information.";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `--help` was seen.
    Help,
    /// `--version` was seen.
    Version,
    /// An unknown option. `token` is what gets echoed back to the user.
    Invalid { token: String },
    /// Copy standard input to standard output and to `files`.
    Run { append: bool, files: Vec<PathBuf> },
}

/// Parses the arguments that follow the program name.
///
/// Parsing stops at the first `--help`, `--version` or invalid option, so
/// anything after one of those is never looked at. Empty arguments are
/// ignored. File paths keep their command-line order, duplicates included,
/// and are taken byte for byte even when they are not valid UTF-8.
pub fn parse<I, S>(args: I) -> Invocation
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut append = false;
    let mut files = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        if arg.is_empty() {
            continue;
        }
        // Only option tokens need to be read as text; a non-UTF-8 option is
        // still an option, its offending part is just shown lossily.
        let text = arg.to_string_lossy();
        if !text.starts_with('-') {
            files.push(PathBuf::from(arg));
            continue;
        }

        if text.starts_with("--") {
            match &*text {
                "--help" => return Invocation::Help,
                "--version" => return Invocation::Version,
                "--append" => append = true,
                _ => return Invocation::Invalid { token: text.to_string() },
            }
            continue;
        }

        // A lone "-" has no flag characters to look at.
        if text.len() == 1 {
            return Invocation::Invalid { token: text.into_owned() };
        }

        for flag in text.chars().skip(1) {
            match flag {
                'a' => append = true,
                other => return Invocation::Invalid { token: format!("-{}", other) },
            }
        }
    }

    Invocation::Run { append, files }
}

/// Version line printed by `--version`.
pub fn version_line() -> String {
    format!("tee v{}", VERSION)
}
