//! Record line format handling
//!
//! This module centralizes the textual record format, providing:
//! - `parse_student` - one input line to a validated [`StudentRecord`]
//! - `format_student` - a record back to its output line
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Line format
//!
//! Whitespace-separated fields, one record per line:
//!
//! ```text
//! FirstName LastName Mon-D-YYYY GPA D          (domestic, 5 fields)
//! FirstName LastName Mon-D-YYYY GPA I TOEFL    (international, 6 fields)
//! ```
//!
//! Validation rules are applied in a fixed order and the first failing
//! rule wins: field count, date token shape, month abbreviation, name
//! length, GPA, birth year, status letter, category/arity consistency,
//! TOEFL score.

use crate::types::{
    month_from_abbrev, Category, DateOfBirth, StudentError, StudentRecord, GPA_EPSILON, GPA_MAX,
    GPA_MIN, NAME_MAX_LEN, TOEFL_MAX, TOEFL_MIN, YEAR_MAX, YEAR_MIN,
};

/// Parse and validate one input line into a [`StudentRecord`].
///
/// Returns the first violated rule as a [`StudentError`]; the caller
/// decides what failure means for the run (the pipeline fail-fasts).
pub fn parse_student(line: &str) -> Result<StudentRecord, StudentError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 5 {
        return Err(StudentError::IncompleteRecord {
            found: fields.len(),
        });
    }
    if fields.len() > 6 {
        return Err(StudentError::ExtraCharacters {
            found: fields.len(),
        });
    }

    let first_name = fields[0];
    let last_name = fields[1];
    let date_of_birth = parse_date_token(fields[2])?;

    for name in [first_name, last_name] {
        if name.chars().count() > NAME_MAX_LEN {
            return Err(StudentError::name_too_long(name));
        }
    }

    let gpa_token = fields[3];
    let gpa: f64 = gpa_token
        .parse()
        .map_err(|_| StudentError::invalid_gpa(gpa_token))?;
    if !(GPA_MIN - GPA_EPSILON..=GPA_MAX + GPA_EPSILON).contains(&gpa) {
        return Err(StudentError::GpaOutOfRange { gpa });
    }

    if !(YEAR_MIN..=YEAR_MAX).contains(&date_of_birth.year) {
        return Err(StudentError::YearOutOfRange {
            year: date_of_birth.year,
        });
    }

    let category = match fields[4] {
        "D" => {
            if fields.len() == 6 {
                // a domestic record must not carry a TOEFL field
                return Err(StudentError::ExtraCharacters { found: 6 });
            }
            Category::Domestic
        }
        "I" => {
            let toefl_token = *fields.get(5).ok_or(StudentError::MissingToefl)?;
            let score: i64 = toefl_token
                .parse()
                .map_err(|_| StudentError::invalid_toefl(toefl_token))?;
            if !(TOEFL_MIN as i64..=TOEFL_MAX as i64).contains(&score) {
                return Err(StudentError::invalid_toefl(toefl_token));
            }
            Category::International {
                toefl_score: score as u32,
            }
        }
        status => return Err(StudentError::invalid_student_type(status)),
    };

    Ok(StudentRecord {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_of_birth,
        gpa,
        category,
    })
}

/// Split a `Mon-D-YYYY` date token and validate its pieces.
///
/// The month abbreviation is resolved first, so an unknown month is
/// reported as "invalid month" even when the rest of the token is also
/// broken. The year range is checked later in the rule order, not here.
fn parse_date_token(token: &str) -> Result<DateOfBirth, StudentError> {
    let parts: Vec<&str> = token.split('-').collect();

    let month = month_from_abbrev(parts[0]).ok_or_else(|| StudentError::invalid_month(parts[0]))?;

    if parts.len() != 3 {
        return Err(StudentError::malformed_date(token));
    }
    let day: u32 = parts[1]
        .parse()
        .map_err(|_| StudentError::malformed_date(token))?;
    let year: i32 = parts[2]
        .parse()
        .map_err(|_| StudentError::malformed_date(token))?;
    if !(1..=31).contains(&day) {
        return Err(StudentError::malformed_date(token));
    }

    Ok(DateOfBirth { day, month, year })
}

/// Serialize a record back to its output line.
///
/// Mirrors the input layout with the GPA rendered at exactly two decimal
/// digits; international records append the TOEFL score.
pub fn format_student(student: &StudentRecord) -> String {
    let mut line = format!(
        "{} {} {} {:.2} {}",
        student.first_name,
        student.last_name,
        student.date_of_birth,
        student.gpa,
        student.category.status_char()
    );
    if let Some(score) = student.category.toefl_score() {
        line.push(' ');
        line.push_str(&score.to_string());
    }
    line
}
