//! The contract between a test program and the shared entry point.
//!
//! A test program provides two collaborators: something that names the suite
//! and something that runs it. Both are expressed by the [`Suite`] trait.
//! [`FnSuite`] adapts a pair of closures for programs that have no state of
//! their own.

use std::fmt;

// ============================================================================
// RUN STATUS
// ============================================================================

/// The integer outcome of running a suite. Zero means success.
///
/// The value becomes the process exit code unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RunStatus(i32);

impl RunStatus {
    pub const SUCCESS: RunStatus = RunStatus(0);

    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    pub const fn code(self) -> i32 {
        self.0
    }

    pub const fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl From<i32> for RunStatus {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl From<RunStatus> for i32 {
    fn from(status: RunStatus) -> Self {
        status.0
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// SUITE CONTRACT
// ============================================================================

/// A runnable test suite.
pub trait Suite {
    /// Human-readable name of the suite.
    fn title(&self) -> String;

    /// Executes the suite and reports its outcome.
    fn run(&mut self) -> RunStatus;
}

impl<S: Suite + ?Sized> Suite for Box<S> {
    fn title(&self) -> String {
        (**self).title()
    }

    fn run(&mut self) -> RunStatus {
        (**self).run()
    }
}

/// A [`Suite`] built from two closures.
pub struct FnSuite<T, R> {
    title: T,
    run: R,
}

impl<T, R> FnSuite<T, R>
where
    T: Fn() -> String,
    R: FnMut() -> i32,
{
    pub fn new(title: T, run: R) -> Self {
        Self { title, run }
    }
}

impl<T, R> Suite for FnSuite<T, R>
where
    T: Fn() -> String,
    R: FnMut() -> i32,
{
    fn title(&self) -> String {
        (self.title)()
    }

    fn run(&mut self) -> RunStatus {
        RunStatus::new((self.run)())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_status_success_is_zero() {
        assert!(RunStatus::SUCCESS.is_success());
        assert_eq!(RunStatus::default(), RunStatus::SUCCESS);
        assert!(!RunStatus::new(1).is_success());
        assert!(!RunStatus::new(-1).is_success());
    }

    #[test]
    fn test_run_status_converts_without_loss() {
        let status = RunStatus::from(-42);
        assert_eq!(status.code(), -42);
        assert_eq!(i32::from(status), -42);
        assert_eq!(status.to_string(), "-42");
    }

    #[test]
    fn test_fn_suite_delegates_to_closures() {
        let mut calls = 0;
        let mut suite = FnSuite::new(
            || "arith".to_string(),
            || {
                calls += 1;
                3
            },
        );
        assert_eq!(suite.title(), "arith");
        assert_eq!(suite.run(), RunStatus::new(3));
        drop(suite);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_boxed_suite_is_a_suite() {
        let mut suite: Box<dyn Suite> = Box::new(FnSuite::new(|| "boxed".to_string(), || 0));
        assert_eq!(suite.title(), "boxed");
        assert!(suite.run().is_success());
    }
}
