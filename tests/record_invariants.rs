//! Record Construction Invariant Tests
//!
//! - Construction is deterministic
//! - Names split at the first separator only
//! - First name is absent, not empty, when there is no separator
//! - Survivor is true only for the exact literal
//! - Malformed rows never fail

use manifestdb::record::{build_record, Age, Column, COLUMN_COUNT};

// =============================================================================
// Determinism Tests
// =============================================================================

/// Same row builds an equal record every time.
#[test]
fn test_build_is_deterministic() {
    let rows: [[&str; 6]; 4] = [
        ["BROWN/ Mrs Margaret ", "44", "1st Class", "Passenger", "", "T"],
        ["SAGE/ Master Thomas Henry", "?", "3rd Class", "Passenger", "", "F"],
        ["ANONYMOUS", "", "", "Crew", "Fireman", ""],
        ["", "", "", "", "", ""],
    ];

    for row in &rows {
        let first = build_record(row);
        for _ in 0..100 {
            assert_eq!(build_record(row), first);
        }
    }
}

// =============================================================================
// Name Splitting Tests
// =============================================================================

/// Whitespace around the separator is kept verbatim.
#[test]
fn test_molly_brown_name_split() {
    let record = build_record(&["BROWN/ Mrs Margaret ", "44", "1st Class", "Passenger", "", "T"]);
    assert_eq!(record.last_name, "BROWN");
    assert_eq!(record.first_name.as_deref(), Some(" Mrs Margaret "));
    assert_eq!(record.full_name, "BROWN/ Mrs Margaret ");
}

/// Absent and empty first names are different.
#[test]
fn test_absent_vs_empty_first_name() {
    let absent = build_record(&["BROWN", "", "", "", "", ""]);
    let empty = build_record(&["BROWN/", "", "", "", "", ""]);

    assert_eq!(absent.first_name, None);
    assert_eq!(empty.first_name, Some(String::new()));
    assert_ne!(absent, empty);
}

/// Later separators stay in the first name.
#[test]
fn test_only_first_separator_splits() {
    let record = build_record(&["DE LA /Mr/ Jose", "", "", "", "", ""]);
    assert_eq!(record.last_name, "DE LA ");
    assert_eq!(record.first_name.as_deref(), Some("Mr/ Jose"));
}

// =============================================================================
// Coercion Tests
// =============================================================================

/// Only "T" means survived.
#[test]
fn test_survivor_coercion() {
    let survived = |raw: &str| build_record(&["X", "", "", "", "", raw]).is_survivor;

    assert!(survived("T"));
    for raw in ["", "F", "t", "True", "1", "T "] {
        assert!(!survived(raw), "{:?}", raw);
    }
}

/// Unparsable ages become the sentinel and compare false against everything.
#[test]
fn test_age_sentinel() {
    let record = build_record(&["X", "forty", "", "", "", ""]);
    assert!(!record.age.is_known());
    assert!(!record.age.is_over(-1.0));
    assert!(!record.age.is_under(1.0e9));
    assert_eq!(record.age, Age::UNKNOWN);

    let record = build_record(&["X", "0.83", "", "", "", ""]);
    assert_eq!(record.age.value(), Some(0.83));
    assert!(record.age.is_under(1.0));
}

// =============================================================================
// Malformed Row Tests
// =============================================================================

/// Missing columns read as empty; extra columns are ignored.
#[test]
fn test_wrong_field_counts() {
    let short = build_record(&["ONLY/ Name"]);
    assert_eq!(short.first_name.as_deref(), Some(" Name"));
    assert!(!short.age.is_known());
    assert!(!short.is_survivor);

    let long = build_record(&["A/ B", "1", "c", "Crew", "r", "T", "x", "y"]);
    assert_eq!(long, build_record(&["A/ B", "1", "c", "Crew", "r", "T"]));
}

/// Column positions match the header order.
#[test]
fn test_column_order() {
    assert_eq!(COLUMN_COUNT, 6);
    assert_eq!(Column::Name as usize, 0);
    assert_eq!(Column::Age as usize, 1);
    assert_eq!(Column::Class as usize, 2);
    assert_eq!(Column::Category as usize, 3);
    assert_eq!(Column::Role as usize, 4);
    assert_eq!(Column::Survivor as usize, 5);
}
