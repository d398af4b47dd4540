//! Error types for the student records engine
//!
//! This module defines every failure the pipeline can produce. The policy
//! is fail-fast: the first error aborts the whole run, is written to the
//! fixed diagnostics file, and the process exits non-zero. No partial
//! output is produced for the records processed so far.
//!
//! # Error Categories
//!
//! - **File I/O errors**: input unreadable, output uncreatable
//! - **Record validation errors**: wrong field count, malformed date token,
//!   unknown month, out-of-range GPA/year/TOEFL, invalid category letter
//! - **Line context**: the reader wraps validation errors with the 1-based
//!   input line number

use thiserror::Error;

/// Main error type for the student records engine
///
/// Each variant carries the offending token or value so the single
/// diagnostic line names what was wrong with the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StudentError {
    /// Input file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Record has fewer whitespace fields than any valid record shape
    #[error("incomplete record: found {found} fields, expected 5 or 6")]
    IncompleteRecord {
        /// Number of fields found on the line
        found: usize,
    },

    /// Record has more fields than any valid record shape, or a domestic
    /// record carries a trailing TOEFL field
    #[error("extra characters in record: found {found} fields")]
    ExtraCharacters {
        /// Number of fields found on the line
        found: usize,
    },

    /// International record is missing its TOEFL score field
    #[error("incomplete international record: missing TOEFL score")]
    MissingToefl,

    /// Date token does not match the `Mon-D-YYYY` pattern
    ///
    /// Covers a wrong number of `-` separated parts, non-numeric day or
    /// year, and a day outside 1-31.
    #[error("malformed date token '{token}'")]
    MalformedDate {
        /// The date token as it appeared on the line
        token: String,
    },

    /// Month abbreviation not in the fixed Jan..Dec table
    #[error("invalid month '{abbrev}'")]
    InvalidMonth {
        /// The month part of the date token
        abbrev: String,
    },

    /// First or last name exceeds the 49 character limit
    #[error("name too long '{name}'")]
    NameTooLong {
        /// The offending name token
        name: String,
    },

    /// GPA field is not a parseable real number
    #[error("invalid GPA '{value}'")]
    InvalidGpa {
        /// The GPA token as it appeared on the line
        value: String,
    },

    /// GPA parsed but falls outside [0.0, 4.3]
    #[error("GPA out of range: {gpa}")]
    GpaOutOfRange {
        /// The parsed GPA value
        gpa: f64,
    },

    /// Birth year falls outside [1950, 2010]
    #[error("year out of range: {year}")]
    YearOutOfRange {
        /// The parsed year
        year: i32,
    },

    /// Status field is not exactly "D" or "I"
    #[error("invalid student type '{status}'")]
    InvalidStudentType {
        /// The status token as it appeared on the line
        status: String,
    },

    /// TOEFL field is not a parseable integer or falls outside [0, 120]
    #[error("invalid TOEFL score '{value}'")]
    InvalidToefl {
        /// The TOEFL token as it appeared on the line
        value: String,
    },

    /// A validation error annotated with its 1-based input line number
    #[error("line {line}: {source}")]
    AtLine {
        /// 1-based line number in the input file
        line: u64,
        /// The underlying validation error
        #[source]
        source: Box<StudentError>,
    },
}

// Conversion from io::Error to StudentError
impl From<std::io::Error> for StudentError {
    fn from(error: std::io::Error) -> Self {
        StudentError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl StudentError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        StudentError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a MalformedDate error
    pub fn malformed_date(token: &str) -> Self {
        StudentError::MalformedDate {
            token: token.to_string(),
        }
    }

    /// Create an InvalidMonth error
    pub fn invalid_month(abbrev: &str) -> Self {
        StudentError::InvalidMonth {
            abbrev: abbrev.to_string(),
        }
    }

    /// Create a NameTooLong error
    pub fn name_too_long(name: &str) -> Self {
        StudentError::NameTooLong {
            name: name.to_string(),
        }
    }

    /// Create an InvalidGpa error
    pub fn invalid_gpa(value: &str) -> Self {
        StudentError::InvalidGpa {
            value: value.to_string(),
        }
    }

    /// Create an InvalidStudentType error
    pub fn invalid_student_type(status: &str) -> Self {
        StudentError::InvalidStudentType {
            status: status.to_string(),
        }
    }

    /// Create an InvalidToefl error
    pub fn invalid_toefl(value: &str) -> Self {
        StudentError::InvalidToefl {
            value: value.to_string(),
        }
    }

    /// Wrap a validation error with its 1-based input line number
    pub fn at_line(line: u64, source: StudentError) -> Self {
        StudentError::AtLine {
            line,
            source: Box::new(source),
        }
    }
}
