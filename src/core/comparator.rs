//! Multi-key comparator over student records
//!
//! The sort policy is an ordered cascade of tie-breaks; the first
//! non-equal criterion decides. The function is pure and deterministic,
//! which the merge sort relies on for its stability guarantee.
//!
//! # Sort policy
//!
//! 1. Birth year ascending
//! 2. Birth month ascending
//! 3. Birth day ascending
//! 4. Last name, case-sensitive lexicographic ascending
//! 5. First name, case-sensitive lexicographic ascending
//! 6. GPA descending (higher first), epsilon-tolerant equality
//! 7. Both international: TOEFL score descending (higher first)
//! 8. Domestic before International when the categories differ

use crate::types::{Category, StudentRecord, GPA_EPSILON};
use std::cmp::Ordering;

/// Compare two student records under the multi-key sort policy.
///
/// Total preorder: for any records `a`, `b`, `c`, comparison is total and
/// transitive, and `Ordering::Equal` means every cascade level tied.
pub fn compare_students(a: &StudentRecord, b: &StudentRecord) -> Ordering {
    let date_a = &a.date_of_birth;
    let date_b = &b.date_of_birth;

    date_a
        .year
        .cmp(&date_b.year)
        .then_with(|| date_a.month.cmp(&date_b.month))
        .then_with(|| date_a.day.cmp(&date_b.day))
        .then_with(|| a.last_name.cmp(&b.last_name))
        .then_with(|| a.first_name.cmp(&b.first_name))
        .then_with(|| compare_gpa_desc(a.gpa, b.gpa))
        .then_with(|| compare_category(&a.category, &b.category))
}

/// GPA descending with epsilon-tolerant equality.
///
/// Near-equal floats compare equal so that rounding noise never decides
/// the order. Known limitation: equality at this level is not transitive
/// for chains of GPAs that each sit within `GPA_EPSILON` of the next
/// while the endpoints differ by more, so the cascade is a total
/// preorder only for inputs whose distinct GPAs are separated by more
/// than the epsilon (true of the usual two-decimal records).
fn compare_gpa_desc(a: f64, b: f64) -> Ordering {
    if (a - b).abs() <= GPA_EPSILON {
        Ordering::Equal
    } else if a > b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Final cascade levels: TOEFL descending when both records are
/// international, Domestic before International otherwise.
fn compare_category(a: &Category, b: &Category) -> Ordering {
    match (a, b) {
        (
            Category::International { toefl_score: ta },
            Category::International { toefl_score: tb },
        ) => tb.cmp(ta),
        (Category::Domestic, Category::Domestic) => Ordering::Equal,
        (Category::Domestic, Category::International { .. }) => Ordering::Less,
        (Category::International { .. }, Category::Domestic) => Ordering::Greater,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DateOfBirth;
    use rstest::rstest;

    /// Build a record with every sort key controllable from the call site.
    fn student(
        first: &str,
        last: &str,
        (day, month, year): (u32, u32, i32),
        gpa: f64,
        category: Category,
    ) -> StudentRecord {
        StudentRecord {
            first_name: first.to_string(),
            last_name: last.to_string(),
            date_of_birth: DateOfBirth { day, month, year },
            gpa,
            category,
        }
    }

    fn base() -> StudentRecord {
        student("John", "Smith", (5, 1, 1990), 3.5, Category::Domestic)
    }

    #[test]
    fn test_year_ascending_dominates() {
        // Lee (1985) sorts before Smith (1990) even with a higher GPA
        let lee = student(
            "Mary",
            "Lee",
            (25, 12, 1985),
            3.8,
            Category::International { toefl_score: 105 },
        );
        let smith = base();
        assert_eq!(compare_students(&lee, &smith), Ordering::Less);
        assert_eq!(compare_students(&smith, &lee), Ordering::Greater);
    }

    #[rstest]
    #[case::month(student("John", "Smith", (5, 2, 1990), 3.5, Category::Domestic))]
    #[case::day(student("John", "Smith", (6, 1, 1990), 3.5, Category::Domestic))]
    #[case::last_name(student("John", "Young", (5, 1, 1990), 3.5, Category::Domestic))]
    #[case::first_name(student("Zoe", "Smith", (5, 1, 1990), 3.5, Category::Domestic))]
    fn test_ascending_tie_breaks(#[case] later: StudentRecord) {
        assert_eq!(compare_students(&base(), &later), Ordering::Less);
        assert_eq!(compare_students(&later, &base()), Ordering::Greater);
    }

    #[test]
    fn test_name_comparison_is_case_sensitive() {
        // ASCII uppercase sorts before lowercase
        let upper = student("John", "Smith", (5, 1, 1990), 3.5, Category::Domestic);
        let lower = student("John", "smith", (5, 1, 1990), 3.5, Category::Domestic);
        assert_eq!(compare_students(&upper, &lower), Ordering::Less);
    }

    #[test]
    fn test_gpa_descending() {
        let high = student("John", "Smith", (5, 1, 1990), 4.0, Category::Domestic);
        let low = student("John", "Smith", (5, 1, 1990), 3.0, Category::Domestic);
        assert_eq!(compare_students(&high, &low), Ordering::Less);
        assert_eq!(compare_students(&low, &high), Ordering::Greater);
    }

    #[test]
    fn test_gpa_epsilon_equality() {
        // A rounding-noise difference must not decide the order; the
        // cascade falls through to the category level
        let a = student("John", "Smith", (5, 1, 1990), 3.5, Category::Domestic);
        let b = student(
            "John",
            "Smith",
            (5, 1, 1990),
            3.500_000_1,
            Category::Domestic,
        );
        assert_eq!(compare_students(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_toefl_descending_between_internationals() {
        let high = student(
            "John",
            "Smith",
            (5, 1, 1990),
            3.5,
            Category::International { toefl_score: 110 },
        );
        let low = student(
            "John",
            "Smith",
            (5, 1, 1990),
            3.5,
            Category::International { toefl_score: 90 },
        );
        assert_eq!(compare_students(&high, &low), Ordering::Less);
        // The ascending reading of this tie-break would invert the pair;
        // assert the direction explicitly on both sides
        assert_eq!(compare_students(&low, &high), Ordering::Greater);
    }

    #[test]
    fn test_last_name_decides_before_toefl() {
        // with equal birth dates the cascade reaches last name at level 4
        // and never consults the TOEFL scores
        let kim = student(
            "Ana",
            "Kim",
            (25, 12, 1985),
            3.8,
            Category::International { toefl_score: 99 },
        );
        let lee = student(
            "Mary",
            "Lee",
            (25, 12, 1985),
            3.8,
            Category::International { toefl_score: 105 },
        );
        assert_eq!(compare_students(&kim, &lee), Ordering::Less);
    }

    #[test]
    fn test_domestic_before_international() {
        let domestic = base();
        let international = student(
            "John",
            "Smith",
            (5, 1, 1990),
            3.5,
            Category::International { toefl_score: 100 },
        );
        assert_eq!(compare_students(&domestic, &international), Ordering::Less);
        assert_eq!(
            compare_students(&international, &domestic),
            Ordering::Greater
        );
    }

    #[test]
    fn test_identical_records_compare_equal() {
        assert_eq!(compare_students(&base(), &base()), Ordering::Equal);
    }

    #[test]
    fn test_totality_and_transitivity() {
        let records = [
            base(),
            student("Mary", "Lee", (25, 12, 1985), 3.8, Category::Domestic),
            student(
                "Ana",
                "Lee",
                (25, 12, 1985),
                3.8,
                Category::International { toefl_score: 100 },
            ),
            student("John", "Smith", (5, 1, 1990), 4.0, Category::Domestic),
            student(
                "John",
                "Smith",
                (5, 1, 1990),
                4.0,
                Category::International { toefl_score: 0 },
            ),
        ];

        for a in &records {
            for b in &records {
                // totality: the pair always compares, and antisymmetrically
                assert_eq!(
                    compare_students(a, b),
                    compare_students(b, a).reverse(),
                    "antisymmetry violated for {:?} vs {:?}",
                    a,
                    b
                );
                for c in &records {
                    if compare_students(a, b) != Ordering::Greater
                        && compare_students(b, c) != Ordering::Greater
                    {
                        assert_ne!(
                            compare_students(a, c),
                            Ordering::Greater,
                            "transitivity violated for {:?} <= {:?} <= {:?}",
                            a,
                            b,
                            c
                        );
                    }
                }
            }
        }
    }
}
