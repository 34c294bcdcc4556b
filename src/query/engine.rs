//! Query engine
//!
//! Evaluation flow (strict order):
//! 1. Parse the query string into directives
//! 2. Start the working subset as the whole input, in input order
//! 3. Narrow the working subset by each directive, in token order
//! 4. Tally survivors over what is left
//!
//! Evaluation borrows the input and keeps no state between calls, so one
//! engine can serve any number of threads against the same snapshot.

use serde::{Deserialize, Serialize};

use crate::record::Record;

use super::outcome::QueryOutcome;
use super::parser::{Query, StridePolicy};
use super::predicate::{MatchMode, Predicate};

/// Engine settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    #[serde(default)]
    pub stride: StridePolicy,
    #[serde(default)]
    pub match_mode: MatchMode,
}

/// Evaluates query strings against borrowed records
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEngine {
    options: QueryOptions,
}

impl QueryEngine {
    /// Creates an engine with the given options
    pub fn new(options: QueryOptions) -> Self {
        Self { options }
    }

    /// Returns the engine options
    pub fn options(&self) -> QueryOptions {
        self.options
    }

    /// Parses a query string with this engine's striding policy
    pub fn parse(&self, input: &str) -> Query {
        Query::parse(input, self.options.stride)
    }

    /// Parses and applies a query string
    pub fn evaluate<'a, I>(&self, records: I, input: &str) -> QueryOutcome<'a>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        self.apply(records, &self.parse(input))
    }

    /// Applies an already parsed query
    pub fn apply<'a, I>(&self, records: I, query: &Query) -> QueryOutcome<'a>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut working: Vec<&'a Record> = records.into_iter().collect();

        for directive in query.directives() {
            if working.is_empty() {
                break;
            }
            let predicate = Predicate::compile(directive, self.options.match_mode);
            working.retain(|record| predicate.test(record));
        }

        QueryOutcome::from_matches(working)
    }

    /// Keeps records whose full name contains `needle`
    pub fn search_name<'a, I>(&self, records: I, needle: &str) -> QueryOutcome<'a>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mode = self.options.match_mode;
        let needle = mode.normalize(needle);

        let matches = records
            .into_iter()
            .filter(|record| mode.contains(&record.full_name, &needle))
            .collect();

        QueryOutcome::from_matches(matches)
    }
}

/// Evaluates a query string with default options (paired striding, exact matching)
pub fn evaluate<'a, I>(records: I, input: &str) -> QueryOutcome<'a>
where
    I: IntoIterator<Item = &'a Record>,
{
    QueryEngine::default().evaluate(records, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::build_record;

    fn fixture() -> Vec<Record> {
        [
            ["BROWN/ Mrs Margaret ", "44", "1st Class", "Passenger", "", "T"],
            ["ASTOR/ Colonel John Jacob", "47", "1st Class", "Passenger", "", "F"],
            ["ASTOR/ Mrs Madeleine", "18", "1st Class", "Passenger", "", "T"],
            ["HARRIS/ Mr Henry Birkhardt", "45", "1st Class", "Passenger", "", "F"],
            ["HARRIS/ Mrs Henry Birkhardt", "35", "1st Class", "Passenger", "", "T"],
            ["SAGE/ Mr Henry", "?", "3rd Class", "Passenger", "", "F"],
            ["FLEET/ Mr Frederick", "24", "Deck", "Crew", "Lookout", "T"],
            ["HARTLEY/ Mr Wallace Henry", "33", "Victualling", "Crew", "Musician", "F"],
            ["NOBODY", "", "Engine", "Crew", "Fireman", "F"],
        ]
        .iter()
        .map(|row| build_record(row))
        .collect()
    }

    fn last_names(outcome: &QueryOutcome<'_>) -> Vec<String> {
        outcome.iter().map(|r| r.last_name.clone()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let records = fixture();
        for q in ["", "   "] {
            let outcome = evaluate(&records, q);
            assert_eq!(outcome.len(), records.len());
            assert_eq!(outcome.survivors() + outcome.not_survivors(), records.len());
        }
    }

    #[test]
    fn test_conjunction_in_token_order() {
        let records = fixture();
        let outcome = evaluate(&records, "clas:1st Class:first:Henry");
        assert_eq!(last_names(&outcome), vec!["HARRIS", "HARRIS"]);
        assert_eq!(outcome.survivors(), 1);
        assert_eq!(outcome.not_survivors(), 1);
    }

    #[test]
    fn test_preserves_input_order() {
        let records = fixture();
        let outcome = evaluate(&records, "first:Henry");
        assert_eq!(last_names(&outcome), vec!["HARRIS", "HARRIS", "SAGE", "HARTLEY"]);
    }

    #[test]
    fn test_flag_keys() {
        let records = fixture();
        assert_eq!(evaluate(&records, "crew").len(), 3);
        assert_eq!(evaluate(&records, "pax").len(), 6);
        assert_eq!(evaluate(&records, "surv").len(), 4);
        assert_eq!(evaluate(&records, "not").len(), 5);
        assert_eq!(evaluate(&records, "role:Music").len(), 1);
    }

    #[test]
    fn test_stride_policies_differ_on_adjacent_flags() {
        let records = fixture();
        let paired = QueryEngine::new(QueryOptions {
            stride: StridePolicy::Paired,
            ..Default::default()
        });
        let compact = QueryEngine::new(QueryOptions {
            stride: StridePolicy::Compact,
            ..Default::default()
        });

        // paired: `crew` is a placeholder, only survivors are kept
        assert_eq!(paired.evaluate(&records, "surv:crew").len(), 4);
        // compact: both apply
        assert_eq!(last_names(&compact.evaluate(&records, "surv:crew")), vec!["FLEET"]);
    }

    #[test]
    fn test_ignore_case_mode() {
        let records = fixture();
        let engine = QueryEngine::new(QueryOptions {
            match_mode: MatchMode::IgnoreCase,
            ..Default::default()
        });
        assert_eq!(engine.evaluate(&records, "last:astor").len(), 2);
        assert_eq!(evaluate(&records, "last:astor").len(), 0);
    }

    #[test]
    fn test_search_name_uses_full_name() {
        let records = fixture();
        let engine = QueryEngine::default();
        let outcome = engine.search_name(&records, "Henry");
        assert_eq!(outcome.len(), 4);

        let outcome = engine.search_name(&records, "HARRIS/ Mrs");
        assert_eq!(outcome.len(), 1);
        assert_eq!(outcome.survivors(), 1);
    }

    #[test]
    fn test_empty_manifest() {
        let records: Vec<Record> = Vec::new();
        let outcome = evaluate(&records, "surv");
        assert!(outcome.is_empty());
        assert_eq!(outcome.survivors(), 0);
        assert_eq!(outcome.not_survivors(), 0);
    }

    #[test]
    fn test_apply_parsed_query() {
        let records = fixture();
        let engine = QueryEngine::default();
        let query = engine.parse("last:ASTOR:surv");
        assert_eq!(query.directives().len(), 2);
        assert_eq!(last_names(&engine.apply(&records, &query)), vec!["ASTOR"]);
    }
}
