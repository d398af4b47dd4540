//! Filtered serialization of the sorted student list
//!
//! Writes one formatted line per record whose category matches the
//! selection mode, in list order. The list arrives already sorted; no
//! re-sorting happens here.

use crate::core::StudentList;
use crate::io::line_format::format_student;
use crate::types::{SelectionMode, StudentError};
use std::io::Write;

/// Write the selected subset of `students` to `output`.
///
/// Membership in the requested category is the only filter. Each record
/// is rendered by [`format_student`] and terminated with a newline.
pub fn write_students(
    students: &StudentList,
    mode: SelectionMode,
    output: &mut dyn Write,
) -> Result<(), StudentError> {
    for student in students {
        if student.matches(mode) {
            writeln!(output, "{}", format_student(student))?;
        }
    }
    output.flush()?;
    Ok(())
}
