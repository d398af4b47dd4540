//! Student Records Engine Library
//! # Overview
//!
//! This library reads a flat text file of student records, validates and
//! parses each line into a typed record, sorts the full set with a
//! deterministic multi-key comparator, and writes a filtered subset back
//! out in the original textual format.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (StudentRecord, DateOfBirth, errors)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::comparator`] - the pure multi-key sort policy
//!   - [`core::list`] - singly-linked sequence with stable merge sort
//!   - [`core::pipeline`] - parse, sort, filter, write orchestration
//! - [`io`] - line parsing/formatting, streaming reader, filtered writer,
//!   and the fail-fast error reporter
//!
//! # Record Categories
//!
//! Records come in two mutually exclusive categories:
//!
//! - **Domestic** (`D`): five fields, no TOEFL score
//! - **International** (`I`): six fields, trailing validated TOEFL score
//!
//! # Error Policy
//!
//! Fail-fast: the first validation or I/O failure aborts the whole run.
//! The diagnostic is written as `Error: <message>` to a fixed file and
//! the process exits non-zero; no partial output is produced.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{compare_students, StudentList};
pub use crate::io::{format_student, parse_student, write_students};
pub use crate::types::{Category, DateOfBirth, SelectionMode, StudentError, StudentRecord};
