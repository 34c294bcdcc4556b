//! Predicate dispatch
//!
//! Maps each key tag to a test over a record. Containment is literal
//! substring matching unless `MatchMode::IgnoreCase` is selected. Category
//! tests are always exact.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Record;

use super::key::QueryKey;
use super::parser::Directive;

/// Substring matching mode for value keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Case-sensitive containment
    #[default]
    Exact,
    /// Both sides lowercased before the containment test
    IgnoreCase,
}

impl MatchMode {
    /// Prepares a needle once per query
    pub(crate) fn normalize(self, needle: &str) -> String {
        match self {
            MatchMode::Exact => needle.to_string(),
            MatchMode::IgnoreCase => needle.to_lowercase(),
        }
    }

    /// Tests a haystack against an already-normalized needle
    pub(crate) fn contains(self, haystack: &str, needle: &str) -> bool {
        match self {
            MatchMode::Exact => haystack.contains(needle),
            MatchMode::IgnoreCase => haystack.to_lowercase().contains(needle),
        }
    }
}

type TextField = fn(&Record) -> Option<&str>;
type Flag = fn(&Record) -> bool;

fn first_name(r: &Record) -> Option<&str> {
    r.first_name.as_deref()
}

fn last_name(r: &Record) -> Option<&str> {
    Some(&r.last_name)
}

fn class(r: &Record) -> Option<&str> {
    Some(&r.class)
}

fn role(r: &Record) -> Option<&str> {
    Some(&r.role)
}

fn survived(r: &Record) -> bool {
    r.is_survivor
}

fn not_survived(r: &Record) -> bool {
    !r.is_survivor
}

/// A compiled test over one record
#[derive(Clone)]
pub enum Predicate {
    /// Field contains needle; an absent field never matches
    Contains {
        key: QueryKey,
        field: TextField,
        needle: String,
        mode: MatchMode,
    },
    /// Boolean test with no value
    Flag { key: QueryKey, test: Flag },
    /// No filtering (value key without a value)
    PassThrough,
}

impl Predicate {
    /// Compiles a directive under the given matching mode
    pub fn compile(directive: &Directive, mode: MatchMode) -> Self {
        let key = directive.key;
        let field: TextField = match key {
            QueryKey::FirstName => first_name,
            QueryKey::LastName => last_name,
            QueryKey::Class => class,
            QueryKey::Role => role,
            QueryKey::Crew => return Self::flag(key, Record::is_crew),
            QueryKey::Passenger => return Self::flag(key, Record::is_passenger),
            QueryKey::Survived => return Self::flag(key, survived),
            QueryKey::NotSurvived => return Self::flag(key, not_survived),
        };

        match &directive.value {
            Some(value) => Predicate::Contains {
                key,
                field,
                needle: mode.normalize(value),
                mode,
            },
            None => Predicate::PassThrough,
        }
    }

    fn flag(key: QueryKey, test: Flag) -> Self {
        Predicate::Flag { key, test }
    }

    /// Tests one record
    pub fn test(&self, record: &Record) -> bool {
        match self {
            Predicate::Contains {
                field, needle, mode, ..
            } => field(record).map_or(false, |text| mode.contains(text, needle)),
            Predicate::Flag { test, .. } => test(record),
            Predicate::PassThrough => true,
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Contains {
                key, needle, mode, ..
            } => f
                .debug_struct("Contains")
                .field("key", key)
                .field("needle", needle)
                .field("mode", mode)
                .finish(),
            Predicate::Flag { key, .. } => f.debug_struct("Flag").field("key", key).finish(),
            Predicate::PassThrough => write!(f, "PassThrough"),
        }
    }
}
