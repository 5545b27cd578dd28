//! Demo suite for the shared entry point.
//!
//! The title and run status come from the environment, which makes the binary
//! handy for checking how a test program behaves under `tmain`:
//!
//! ```bash
//! TMAIN_SUITE_TITLE=Lists TMAIN_SUITE_STATUS=3 tmain; echo $?
//! ```

use std::env;
use std::process;

use tmain::{HarnessError, RunStatus, Suite};

const TITLE_ENV: &str = "TMAIN_SUITE_TITLE";
const STATUS_ENV: &str = "TMAIN_SUITE_STATUS";

/// Exit code for a bad demo configuration.
const CONFIG_ERROR_EXIT: i32 = 2;

struct EnvSuite {
    title: String,
    status: RunStatus,
}

impl EnvSuite {
    fn from_env() -> Result<Self, HarnessError> {
        let title = env::var(TITLE_ENV).unwrap_or_else(|_| env!("CARGO_PKG_NAME").to_string());
        let status = match env::var(STATUS_ENV) {
            Ok(value) => parse_status(&value)?,
            Err(_) => RunStatus::SUCCESS,
        };
        Ok(Self { title, status })
    }
}

fn parse_status(value: &str) -> Result<RunStatus, HarnessError> {
    value
        .trim()
        .parse::<i32>()
        .map(RunStatus::new)
        .map_err(|source| HarnessError::InvalidStatus {
            value: value.to_string(),
            source,
        })
}

impl Suite for EnvSuite {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn run(&mut self) -> RunStatus {
        self.status
    }
}

fn main() {
    match EnvSuite::from_env() {
        Ok(suite) => tmain::main(suite),
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            process::exit(CONFIG_ERROR_EXIT);
        }
    }
}
