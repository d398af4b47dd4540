//! Fail-fast error reporter
//!
//! The uniform sink for every validation and I/O failure: a single
//! `Error: <message>` line written to a fixed, well-known file. The file
//! is created or truncated per invocation, so only the first failure
//! message persists - the process exits right after reporting.

use crate::types::StudentError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Fixed diagnostics file path, relative to the working directory.
pub const ERROR_FILE: &str = "error_output.txt";

/// Report a failure to the fixed diagnostics file.
///
/// Returns the underlying I/O error if the diagnostic itself cannot be
/// written; the caller falls back to stderr in that case.
pub fn report_failure(error: &StudentError) -> std::io::Result<()> {
    report_failure_to(Path::new(ERROR_FILE), error)
}

/// Report a failure to an explicit diagnostics path.
///
/// Truncates any previous contents and writes the single line
/// `Error: <message>`.
pub fn report_failure_to(path: &Path, error: &StudentError) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Error: {}", error)?;
    file.flush()
}
