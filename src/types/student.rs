//! Student record types for the student records engine
//!
//! This module defines the student category tagged union, the record type
//! shared by the whole pipeline, and the output selection mode.

use crate::types::DateOfBirth;

/// Tolerance for GPA floating-point comparisons.
///
/// Used both when range-checking a parsed GPA (a value a hair above 4.3
/// from decimal-to-binary rounding is still accepted) and when the
/// comparator decides whether two GPAs are equal.
pub const GPA_EPSILON: f64 = 1e-4;

/// Lower bound of the inclusive GPA validity range.
pub const GPA_MIN: f64 = 0.0;

/// Upper bound of the inclusive GPA validity range.
pub const GPA_MAX: f64 = 4.3;

/// Lower bound of the inclusive birth year validity range.
pub const YEAR_MIN: i32 = 1950;

/// Upper bound of the inclusive birth year validity range.
pub const YEAR_MAX: i32 = 2010;

/// Lower bound of the inclusive TOEFL score validity range.
pub const TOEFL_MIN: u32 = 0;

/// Upper bound of the inclusive TOEFL score validity range.
pub const TOEFL_MAX: u32 = 120;

/// Maximum length of a first or last name, in characters.
pub const NAME_MAX_LEN: usize = 49;

/// Student category
///
/// The two mutually exclusive categories, distinguished in the record
/// format by the status letter and by whether a TOEFL score field is
/// present. Carrying the score as the variant payload makes "TOEFL is
/// present if and only if the student is international" a type invariant
/// rather than a runtime check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Domestic student, status letter 'D', no TOEFL field
    Domestic,

    /// International student, status letter 'I', with a validated
    /// TOEFL score
    International {
        /// TOEFL score, 0-120 inclusive
        toefl_score: u32,
    },
}

impl Category {
    /// The status letter echoed back into the output format.
    pub fn status_char(&self) -> char {
        match self {
            Category::Domestic => 'D',
            Category::International { .. } => 'I',
        }
    }

    /// The TOEFL score, present only for international students.
    pub fn toefl_score(&self) -> Option<u32> {
        match self {
            Category::Domestic => None,
            Category::International { toefl_score } => Some(*toefl_score),
        }
    }
}

/// One validated student record
///
/// Created one per valid input line during parsing; invalid lines produce
/// no record and instead fail the whole run. Names are non-empty
/// whitespace tokens of at most [`NAME_MAX_LEN`] characters; GPA is in
/// [0.0, 4.3] (with [`GPA_EPSILON`] tolerance above the top).
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    /// First name token, non-empty, at most 49 characters
    pub first_name: String,

    /// Last name token, non-empty, at most 49 characters
    pub last_name: String,

    /// Date of birth, parsed from the `Mon-D-YYYY` token
    pub date_of_birth: DateOfBirth,

    /// Grade point average, valid range [0.0, 4.3]
    pub gpa: f64,

    /// Domestic or International, with the TOEFL score attached to the
    /// international variant
    pub category: Category,
}

impl StudentRecord {
    /// Whether this record is selected by the given output mode.
    pub fn matches(&self, mode: SelectionMode) -> bool {
        match mode {
            SelectionMode::All => true,
            SelectionMode::DomesticOnly => matches!(self.category, Category::Domestic),
            SelectionMode::InternationalOnly => {
                matches!(self.category, Category::International { .. })
            }
        }
    }
}

/// Which subset of the sorted records the writer emits
///
/// Selected on the command line as an integer: 1 = Domestic only,
/// 2 = International only, 3 = All.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    DomesticOnly,
    InternationalOnly,
    All,
}
