//! Birth date type and the month abbreviation codec
//!
//! Months are written in the record format as fixed 3-letter capitalized
//! abbreviations (Jan..Dec). The codec converts between an abbreviation and
//! its 1-12 ordinal; lookups are exact and case-sensitive, so "JAN" or "jan"
//! do not resolve.

use std::fmt;

/// Fixed month abbreviation table, index 0 = January.
const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Resolve a 3-letter capitalized month abbreviation to its 1-12 ordinal.
///
/// Matching is exact and case-sensitive. Returns `None` for anything that
/// is not one of the twelve table entries.
pub fn month_from_abbrev(abbrev: &str) -> Option<u32> {
    MONTH_ABBREVS
        .iter()
        .position(|&m| m == abbrev)
        .map(|idx| idx as u32 + 1)
}

/// Inverse of [`month_from_abbrev`]: the abbreviation for an ordinal in 1..=12.
pub fn month_abbrev(month: u32) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTH_ABBREVS[month as usize - 1]),
        _ => None,
    }
}

/// A student's date of birth, as parsed from a `Mon-D-YYYY` token.
///
/// Field invariants are enforced at parse time: month comes from the codec
/// (1-12), day is range-checked 1-31, year is range-checked 1950-2010.
/// Day is never validated against the days-in-month calendar, so Feb-31 is
/// accepted as given. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateOfBirth {
    /// Day of month, 1-31 (no calendar check against month/year)
    pub day: u32,

    /// Month ordinal, 1-12, resolved from the abbreviation table
    pub month: u32,

    /// Four-digit year, 1950-2010
    pub year: i32,
}

impl fmt::Display for DateOfBirth {
    /// Renders the original `Mon-D-YYYY` layout, day and year unpadded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // month is 1-12 by construction
        let abbrev = month_abbrev(self.month).unwrap_or("???");
        write!(f, "{}-{}-{}", abbrev, self.day, self.year)
    }
}
