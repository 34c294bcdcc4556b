//! Builds records from raw rows
//!
//! Missing trailing fields read as empty strings and extra fields are
//! ignored, so construction never fails.

use super::types::{Age, Record};

/// Separates last name from first name in the full-name field
pub const NAME_SEPARATOR: char = '/';

/// The only survivor-field value that means "survived"
pub const SURVIVOR_LITERAL: &str = "T";

/// Number of columns a well-formed row carries
pub const COLUMN_COUNT: usize = 6;

/// Raw column positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name = 0,
    Age = 1,
    Class = 2,
    Category = 3,
    Role = 4,
    Survivor = 5,
}

impl Column {
    fn read<S: AsRef<str>>(self, row: &[S]) -> &str {
        row.get(self as usize).map_or("", |field| field.as_ref())
    }
}

/// Builds one record from one raw row.
///
/// Same row in, equal record out.
pub fn build_record<S: AsRef<str>>(row: &[S]) -> Record {
    let full_name = Column::Name.read(row);
    let (last_name, first_name) = split_name(full_name);

    Record {
        full_name: full_name.to_string(),
        last_name: last_name.to_string(),
        first_name: first_name.map(str::to_string),
        age: Age::parse(Column::Age.read(row)),
        class: Column::Class.read(row).to_string(),
        role: Column::Role.read(row).to_string(),
        category: Column::Category.read(row).to_string(),
        is_survivor: Column::Survivor.read(row) == SURVIVOR_LITERAL,
    }
}

/// Splits around the first separator only. Whitespace is kept verbatim.
fn split_name(full_name: &str) -> (&str, Option<&str>) {
    match full_name.split_once(NAME_SEPARATOR) {
        Some((last, first)) => (last, Some(first)),
        None => (full_name, None),
    }
}
