//! Query string parser
//!
//! Turns `clas:1st Class:first:Henry` into an ordered list of directives.
//! Parsing never fails: unknown keys and missing values simply produce no
//! filtering.

use serde::{Deserialize, Serialize};

use super::key::QueryKey;

/// Separates tokens in a query string
pub const QUERY_SEPARATOR: char = ':';

/// How the cursor advances past keys that take no value
/// (`crew`, `pax`, `surv`, `not`) and past unrecognized keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StridePolicy {
    /// Strict key/value striding. Every key consumes the token after it,
    /// so in `surv:crew` the `crew` token is an ignored placeholder.
    #[default]
    Paired,
    /// Only value keys consume the token after them, so in `surv:crew`
    /// both keys apply.
    Compact,
}

impl StridePolicy {
    /// Cursor advance for a key that takes no value
    fn flag_stride(self) -> usize {
        match self {
            StridePolicy::Paired => 2,
            StridePolicy::Compact => 1,
        }
    }

    /// Returns the config/display name
    pub fn as_str(&self) -> &'static str {
        match self {
            StridePolicy::Paired => "paired",
            StridePolicy::Compact => "compact",
        }
    }
}

/// One resolved key with its value, if it takes one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directive {
    pub key: QueryKey,
    /// `None` for flag keys, and for value keys at the end of the query
    pub value: Option<String>,
}

impl Directive {
    /// A value key with its value
    pub fn with_value(key: QueryKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: Some(value.into()),
        }
    }

    /// A flag key
    pub fn flag(key: QueryKey) -> Self {
        Self { key, value: None }
    }
}

/// A parsed query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Query {
    directives: Vec<Directive>,
}

impl Query {
    /// Parses a query string under the given striding policy
    pub fn parse(input: &str, policy: StridePolicy) -> Self {
        if input.trim().is_empty() {
            return Self::default();
        }

        let tokens: Vec<&str> = input.split(QUERY_SEPARATOR).collect();
        let mut directives = Vec::new();
        let mut cursor = 0;

        while cursor < tokens.len() {
            match QueryKey::resolve(tokens[cursor]) {
                Some(key) if key.takes_value() => {
                    directives.push(Directive {
                        key,
                        value: tokens.get(cursor + 1).map(|v| v.to_string()),
                    });
                    cursor += 2;
                }
                Some(key) => {
                    directives.push(Directive::flag(key));
                    cursor += policy.flag_stride();
                }
                None => cursor += policy.flag_stride(),
            }
        }

        Self { directives }
    }

    /// Builds a query from directives directly
    pub fn from_directives(directives: Vec<Directive>) -> Self {
        Self { directives }
    }

    /// Returns directives in application order
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Returns true if the query filters nothing
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}
