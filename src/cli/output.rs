//! Handles all user-facing output for the CLI.
//!
//! Stdout carries nothing but these two shapes, byte for byte. Diagnostics go
//! to stderr through `tracing`.

use std::io::{self, Write};

/// Title mode: the title alone, with no newline appended.
pub fn write_title<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    out.write_all(title.as_bytes())?;
    out.flush()
}

/// Run mode: a leading newline, the title, then `".\n"`.
///
/// Flushed immediately so the banner precedes anything the suite prints.
pub fn write_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    out.write_all(format!("\n{}.\n", title).as_bytes())?;
    out.flush()
}
