//! Result of evaluating a query

use serde::Serialize;

use crate::record::Record;

use super::aggregate::SurvivalCounts;

/// Matching records in manifest order, plus survivor counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryOutcome<'a> {
    pub matches: Vec<&'a Record>,
    #[serde(flatten)]
    pub counts: SurvivalCounts,
}

impl<'a> QueryOutcome<'a> {
    /// Wraps a final working subset and tallies it
    pub fn from_matches(matches: Vec<&'a Record>) -> Self {
        let counts = SurvivalCounts::tally(matches.iter().copied());
        Self { matches, counts }
    }

    /// Returns an outcome with no matches
    pub fn empty() -> Self {
        Self::from_matches(Vec::new())
    }

    /// Number of survivors among the matches
    pub fn survivors(&self) -> usize {
        self.counts.survivors
    }

    /// Number of non-survivors among the matches
    pub fn not_survivors(&self) -> usize {
        self.counts.not_survivors
    }

    /// Returns the number of matches
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Returns true if nothing matched
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Iterates the matches in order
    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.matches.iter().copied()
    }
}
