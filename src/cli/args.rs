//! Classifies the process arguments.
//!
//! There is exactly one recognized invocation: a single `-t`. Everything else,
//! including `--help`, `--` and unknown flags, selects the run path without
//! complaint. A general-purpose parser would reject or reinterpret some of
//! those shapes, so the classification is done on the raw argument vector.

use std::ffi::OsStr;

/// The flag that asks for the suite title only.
pub const TITLE_FLAG: &str = "-t";

/// What the dispatcher should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the title and exit with status 0.
    Title,
    /// Print the banner, run the suite, and exit with its status.
    Run,
}

impl Mode {
    /// Classifies a full argument vector, program name included.
    pub fn from_args<I, A>(args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: AsRef<OsStr>,
    {
        let mut rest = args.into_iter().skip(1);
        match (rest.next(), rest.next()) {
            (Some(only), None) if only.as_ref() == OsStr::new(TITLE_FLAG) => Mode::Title,
            _ => Mode::Run,
        }
    }
}
