//! The command-line entry point shared by every test program.
//!
//! A test program implements [`Suite`] and hands it to [`main`]. The argument
//! vector picks between printing the title and running the suite; the run
//! status becomes the process exit code.

use std::ffi::OsStr;
use std::io::{self, Write};
use std::process;

use tracing::{debug, warn};

use crate::errors::HarnessError;
use crate::logging;
use crate::suite::{RunStatus, Suite};

pub mod args;
pub mod output;

pub use args::Mode;

/// Carries out `mode` against `suite`, writing to `out`.
///
/// Title mode never calls [`Suite::run`]. In run mode a failed banner write is
/// logged and the suite runs anyway, so the returned status is always the
/// suite's own.
pub fn dispatch<S, W>(mode: Mode, suite: &mut S, out: &mut W) -> Result<RunStatus, HarnessError>
where
    S: Suite + ?Sized,
    W: Write,
{
    let title = suite.title();
    debug!(?mode, %title, "dispatching suite");

    match mode {
        Mode::Title => {
            output::write_title(out, &title)?;
            Ok(RunStatus::SUCCESS)
        }
        Mode::Run => {
            if let Err(err) = output::write_banner(out, &title) {
                warn!(error = %HarnessError::from(err), "banner was not written");
            }
            let status = suite.run();
            debug!(%status, "suite finished");
            Ok(status)
        }
    }
}

/// Classifies `args`, dispatches, and folds any error into a status.
///
/// A title that could not be written still yields status 0.
pub fn run<I, A, S, W>(args: I, mut suite: S, out: &mut W) -> RunStatus
where
    I: IntoIterator<Item = A>,
    A: AsRef<OsStr>,
    S: Suite,
    W: Write,
{
    let mode = Mode::from_args(args);
    match dispatch(mode, &mut suite, out) {
        Ok(status) => status,
        Err(err) => {
            warn!(error = %err, "title was not written");
            RunStatus::SUCCESS
        }
    }
}

/// Process entry point: installs logging, dispatches on the real arguments
/// and exits with the resulting status.
///
/// Stdout is not held locked while the suite runs, so suites may print from
/// other threads.
pub fn main<S: Suite>(suite: S) -> ! {
    logging::init();
    let status = run(std::env::args_os(), suite, &mut io::stdout());
    process::exit(status.code())
}
