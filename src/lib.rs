//! Shared entry point for standalone test programs.
//!
//! ```no_run
//! use tmain::FnSuite;
//!
//! fn main() {
//!     tmain::main(FnSuite::new(|| "Lists".to_string(), || 0))
//! }
//! ```
//!
//! Run with `-t` to print the title alone; run with anything else to print a
//! banner, execute the suite, and exit with its status.

pub use crate::cli::{dispatch, main, run, Mode};
pub use crate::errors::HarnessError;
pub use crate::suite::{FnSuite, RunStatus, Suite};

pub mod cli;
pub mod errors;
pub mod logging;
pub mod suite;
