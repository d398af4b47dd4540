//! I/O handling for the student records engine
//!
//! - [`line_format`] - pure record line parsing and formatting
//! - [`reader`] - streaming line reader with line-numbered errors
//! - [`writer`] - filtered serialization of the sorted list
//! - [`reporter`] - fixed-file fail-fast diagnostics

pub mod line_format;
pub mod reader;
pub mod reporter;
pub mod writer;

pub use line_format::{format_student, parse_student};
pub use reader::StudentReader;
pub use reporter::{report_failure, report_failure_to, ERROR_FILE};
pub use writer::write_students;
