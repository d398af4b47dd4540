//! Pipeline orchestration: parse, sort, filter, write
//!
//! The stages run strictly in sequence. The whole input file is loaded
//! into the linked list before sorting begins, and the first validation
//! or I/O failure aborts the run with no partial output guarantee for
//! the records processed so far.
//!
//! Resource discipline: the input handle lives only for the parse stage;
//! the output handle only for the write stage.

use crate::core::comparator::compare_students;
use crate::core::list::StudentList;
use crate::io::reader::StudentReader;
use crate::io::writer::write_students;
use crate::types::{SelectionMode, StudentError};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Run the complete pipeline for one input file.
///
/// Reads and validates every record (fail-fast on the first bad line),
/// sorts the collection with the multi-key comparator, then writes the
/// subset selected by `mode` to `output_path`.
pub fn run(
    input_path: &Path,
    output_path: &Path,
    mode: SelectionMode,
) -> Result<(), StudentError> {
    let mut students = load_students(input_path)?;
    students.sort_by(compare_students);

    let file = File::create(output_path).map_err(|e| StudentError::Io {
        message: format!(
            "Failed to create output file '{}': {}",
            output_path.display(),
            e
        ),
    })?;
    let mut output = BufWriter::new(file);
    write_students(&students, mode, &mut output)
}

/// Load the whole input file into a [`StudentList`] in file order.
///
/// The first `Err` from the reader aborts the load and propagates; no
/// record from the offending line or any later line survives.
pub fn load_students(path: &Path) -> Result<StudentList, StudentError> {
    let reader = StudentReader::new(path)?;
    reader.collect()
}
