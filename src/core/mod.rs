//! Core logic of the student records engine
//!
//! - [`comparator`] - the pure multi-key sort policy
//! - [`list`] - the singly-linked sequence and its stable merge sort
//! - [`pipeline`] - parse, sort, filter, write orchestration

pub mod comparator;
pub mod list;
pub mod pipeline;

pub use comparator::compare_students;
pub use list::StudentList;
