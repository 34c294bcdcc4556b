//! Record model for manifestdb
//!
//! A record is built once from one raw row and never changes afterwards.
//!
//! # Column order
//!
//! full name, age, class, passenger/crew flag, role, survivor flag
//!
//! # Invariants
//!
//! - Construction is a pure function of the raw row
//! - Construction never fails; malformed rows degrade to defaults
//! - `first_name` is absent (not empty) when the name has no separator

mod builder;
mod types;

pub use builder::{build_record, Column, COLUMN_COUNT, NAME_SEPARATOR, SURVIVOR_LITERAL};
pub use types::{Age, Record, CATEGORY_CREW, CATEGORY_PASSENGER};
