//! Error type for the harness.
//!
//! Nothing here ever changes the exit code of a suite run. Output errors are
//! logged and swallowed by the dispatcher; configuration errors only come from
//! the demo binary.

use miette::Diagnostic;
use std::io;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum HarnessError {
    #[error("failed to write suite output: {0}")]
    #[diagnostic(code(tmain::output))]
    Output(#[from] io::Error),

    #[error("invalid suite status '{value}'")]
    #[diagnostic(
        code(tmain::config::status),
        help("TMAIN_SUITE_STATUS must be a signed 32-bit integer, e.g. 0 or 3")
    )]
    InvalidStatus {
        value: String,
        #[source]
        source: ParseIntError,
    },
}
