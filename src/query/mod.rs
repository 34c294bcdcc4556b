//! Query engine for manifestdb
//!
//! A query is a `:`-separated token string such as
//! `clas:1st Class:first:Henry:surv`. Keys resolve by their first four
//! characters, case-insensitively:
//!
//! | Key    | Keeps records where              |
//! |--------|----------------------------------|
//! | `FIRS` | first name contains value        |
//! | `LAST` | last name contains value         |
//! | `CLAS` | class contains value             |
//! | `ROLE` | role contains value              |
//! | `CREW` | category is `Crew`               |
//! | `PAX`  | category is `Passenger`          |
//! | `SURV` | survived                         |
//! | `NOT`  | did not survive                  |
//!
//! Anything else filters nothing. Directives narrow one working subset in
//! token order (logical AND). Malformed queries never fail.

mod aggregate;
mod engine;
mod key;
mod outcome;
mod parser;
mod predicate;

pub use aggregate::SurvivalCounts;
pub use engine::{evaluate, QueryEngine, QueryOptions};
pub use key::{QueryKey, KEY_PREFIX_LEN};
pub use outcome::QueryOutcome;
pub use parser::{Directive, Query, StridePolicy, QUERY_SEPARATOR};
pub use predicate::{MatchMode, Predicate};
