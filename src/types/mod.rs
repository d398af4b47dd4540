//! Core types for the student records engine
//!
//! This module contains the domain types used throughout the pipeline:
//! the birth date and month codec, the student record tagged union, the
//! output selection mode, and the error type.

pub mod date;
pub mod error;
pub mod student;

pub use date::{month_abbrev, month_from_abbrev, DateOfBirth};
pub use error::StudentError;
pub use student::{
    Category, SelectionMode, StudentRecord, GPA_EPSILON, GPA_MAX, GPA_MIN, NAME_MAX_LEN,
    TOEFL_MAX, TOEFL_MIN, YEAR_MAX, YEAR_MIN,
};
