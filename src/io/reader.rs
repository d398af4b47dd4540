//! Line-oriented student record reader with iterator interface
//!
//! Streams one record per input line, delegating the field-level work to
//! [`line_format::parse_student`]. The reader attaches 1-based line
//! numbers to validation failures so the single diagnostic names the
//! offending line.
//!
//! Fatal open errors (file not found, permissions) are returned from
//! `new()`; per-line failures are yielded as `Err` items. Whether an
//! `Err` aborts the run is the caller's policy - the pipeline fail-fasts
//! on the first one.
//!
//! [`line_format::parse_student`]: crate::io::line_format::parse_student

use crate::io::line_format::parse_student;
use crate::types::{StudentError, StudentRecord};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Streaming reader over a student records file
///
/// Implements `Iterator`, yielding `Result<StudentRecord, StudentError>`
/// per non-blank input line. Blank lines (including the trailing newline
/// most files end with) are skipped without consuming a line's worth of
/// validation.
#[derive(Debug)]
pub struct StudentReader {
    lines: Lines<BufReader<File>>,
    line_num: u64,
}

impl StudentReader {
    /// Open a records file for streaming iteration.
    ///
    /// A missing file is reported as [`StudentError::FileNotFound`];
    /// any other open failure as [`StudentError::Io`].
    pub fn new(path: &Path) -> Result<Self, StudentError> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StudentError::file_not_found(&path.display().to_string())
            } else {
                StudentError::from(e)
            }
        })?;

        Ok(Self {
            lines: BufReader::new(file).lines(),
            line_num: 0,
        })
    }
}

impl Iterator for StudentReader {
    type Item = Result<StudentRecord, StudentError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(StudentError::from(e))),
            };
            self.line_num += 1;

            if line.trim().is_empty() {
                continue;
            }
            return Some(
                parse_student(&line).map_err(|e| StudentError::at_line(self.line_num, e)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary records file for testing
    fn create_temp_records(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_reader_new_fails_on_missing_file() {
        let result = StudentReader::new(Path::new("nonexistent.txt"));
        assert!(matches!(result, Err(StudentError::FileNotFound { .. })));
    }

    #[test]
    fn test_reader_iterates_valid_records() {
        let file = create_temp_records(
            "John Smith Jan-5-1990 3.50 D\nMary Lee Dec-25-1985 3.80 I 105\n",
        );

        let reader = StudentReader::new(file.path()).unwrap();
        let records: Vec<_> = reader.collect::<Result<_, _>>().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].first_name, "John");
        assert_eq!(records[0].category, Category::Domestic);
        assert_eq!(
            records[1].category,
            Category::International { toefl_score: 105 }
        );
    }

    #[test]
    fn test_reader_skips_blank_lines() {
        let file = create_temp_records("\nJohn Smith Jan-5-1990 3.50 D\n\n   \n");

        let reader = StudentReader::new(file.path()).unwrap();
        let records: Vec<_> = reader.collect::<Result<_, _>>().unwrap();

        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_reader_handles_empty_file() {
        let file = create_temp_records("");
        let reader = StudentReader::new(file.path()).unwrap();
        assert_eq!(reader.count(), 0);
    }

    #[test]
    fn test_reader_includes_line_numbers_in_errors() {
        let file = create_temp_records(
            "John Smith Jan-5-1990 3.50 D\nBob NoDate X-1990 3.0 D\nAna Kim Jun-1-2000 4.00 I 99\n",
        );

        let reader = StudentReader::new(file.path()).unwrap();
        let results: Vec<_> = reader.collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert_eq!(
            results[1],
            Err(StudentError::at_line(2, StudentError::invalid_month("X")))
        );
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_reader_line_numbers_count_blank_lines() {
        let file = create_temp_records("\n\nJohn Smith Jan-5-1990 9.9 D\n");

        let reader = StudentReader::new(file.path()).unwrap();
        let results: Vec<_> = reader.collect();

        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0],
            Err(StudentError::at_line(
                3,
                StudentError::GpaOutOfRange { gpa: 9.9 }
            ))
        );
    }
}
