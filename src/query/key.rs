//! Query key tags
//!
//! Key tokens resolve by their first four characters, uppercased.

use std::fmt;

use serde::Serialize;

/// Number of leading key characters that select a key
pub const KEY_PREFIX_LEN: usize = 4;

/// Recognized query keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKey {
    /// `first_name` contains value
    FirstName,
    /// `last_name` contains value
    LastName,
    /// `class` contains value
    Class,
    /// `role` contains value
    Role,
    /// category is `Crew`
    Crew,
    /// category is `Passenger`
    Passenger,
    /// survived
    Survived,
    /// did not survive
    NotSurvived,
}

impl QueryKey {
    /// All keys with their lookup prefixes
    pub const TABLE: [(&'static str, QueryKey); 8] = [
        ("FIRS", QueryKey::FirstName),
        ("LAST", QueryKey::LastName),
        ("CLAS", QueryKey::Class),
        ("ROLE", QueryKey::Role),
        ("CREW", QueryKey::Crew),
        ("PAX", QueryKey::Passenger),
        ("SURV", QueryKey::Survived),
        ("NOT", QueryKey::NotSurvived),
    ];

    /// Resolves a key token, or `None` if it is not a recognized key.
    ///
    /// `firstname`, `First`, `FIRS` all resolve to `FirstName`. `pax` resolves
    /// but `paxx` does not, since its four-character prefix is `PAXX`.
    pub fn resolve(token: &str) -> Option<Self> {
        let prefix: String = token.to_uppercase().chars().take(KEY_PREFIX_LEN).collect();

        Self::TABLE
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, key)| *key)
    }

    /// Returns the lookup prefix for this key
    pub fn prefix(&self) -> &'static str {
        match self {
            QueryKey::FirstName => "FIRS",
            QueryKey::LastName => "LAST",
            QueryKey::Class => "CLAS",
            QueryKey::Role => "ROLE",
            QueryKey::Crew => "CREW",
            QueryKey::Passenger => "PAX",
            QueryKey::Survived => "SURV",
            QueryKey::NotSurvived => "NOT",
        }
    }

    /// Returns true if this key filters on a paired value token
    pub fn takes_value(&self) -> bool {
        matches!(
            self,
            QueryKey::FirstName | QueryKey::LastName | QueryKey::Class | QueryKey::Role
        )
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}
