//! Record and age types

use std::fmt;

use serde::{Serialize, Serializer};

/// Category literal for crew members
pub const CATEGORY_CREW: &str = "Crew";

/// Category literal for passengers
pub const CATEGORY_PASSENGER: &str = "Passenger";

/// Age in years, or the unknown sentinel.
///
/// The sentinel is NaN, so every ordering comparison against it is false.
/// Equality is bitwise and the sentinel equals itself.
#[derive(Debug, Clone, Copy)]
pub struct Age(f64);

impl Age {
    /// The non-numeric sentinel
    pub const UNKNOWN: Age = Age(f64::NAN);

    /// Creates an age from a number
    pub fn new(years: f64) -> Self {
        Self(years)
    }

    /// Coerces a raw field into an age.
    ///
    /// Surrounding whitespace is ignored. Anything that is not a finite
    /// decimal number (including the empty string) becomes `UNKNOWN`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::UNKNOWN;
        }

        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Self(v),
            _ => Self::UNKNOWN,
        }
    }

    /// Returns the raw number (NaN when unknown)
    pub fn as_f64(&self) -> f64 {
        self.0
    }

    /// Returns the age if known
    pub fn value(&self) -> Option<f64> {
        if self.is_known() {
            Some(self.0)
        } else {
            None
        }
    }

    /// Returns true unless this is the sentinel
    pub fn is_known(&self) -> bool {
        !self.0.is_nan()
    }

    /// Strictly older than `years`; always false when unknown
    pub fn is_over(&self, years: f64) -> bool {
        self.0 > years
    }

    /// Strictly younger than `years`; always false when unknown
    pub fn is_under(&self, years: f64) -> bool {
        self.0 < years
    }
}

impl PartialEq for Age {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits() || (self.0.is_nan() && other.0.is_nan())
    }
}

impl Eq for Age {}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "NaN"),
        }
    }
}

impl Serialize for Age {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// One person on the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Name exactly as received, e.g. `BROWN/ Mrs Margaret `
    pub full_name: String,
    /// Text before the first separator
    pub last_name: String,
    /// Text after the first separator; `None` when there is no separator
    pub first_name: Option<String>,
    pub age: Age,
    /// Free-form label such as `1st Class`
    pub class: String,
    pub role: String,
    /// `Passenger` or `Crew`, stored verbatim
    pub category: String,
    pub is_survivor: bool,
}

impl Record {
    /// Returns true if the category is exactly `Crew`
    pub fn is_crew(&self) -> bool {
        self.category == CATEGORY_CREW
    }

    /// Returns true if the category is exactly `Passenger`
    pub fn is_passenger(&self) -> bool {
        self.category == CATEGORY_PASSENGER
    }
}
