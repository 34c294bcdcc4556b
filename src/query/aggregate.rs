//! Survivor aggregates over a result set

use serde::Serialize;

use crate::record::Record;

/// Survivor / non-survivor counts. Always sums to the number of records tallied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SurvivalCounts {
    pub survivors: usize,
    pub not_survivors: usize,
}

impl SurvivalCounts {
    /// Counts survivors and non-survivors in one pass
    pub fn tally<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records
            .into_iter()
            .fold(Self::default(), |mut counts, record| {
                if record.is_survivor {
                    counts.survivors += 1;
                } else {
                    counts.not_survivors += 1;
                }
                counts
            })
    }

    /// Total records counted
    pub fn total(&self) -> usize {
        self.survivors + self.not_survivors
    }
}
