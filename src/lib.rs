//! manifestdb - a deterministic in-memory record manifest with a compact
//! token query language
//!
//! The core is [`record`] and [`query`]: pure, synchronous, and free of I/O.
//! [`manifest`], [`observability`] and [`cli`] wrap it into a runnable tool.
//!
//! ```
//! use manifestdb::manifest::Manifest;
//! use manifestdb::query::evaluate;
//!
//! let manifest = Manifest::parse(
//!     "Name,Age,Class,Passenger or Crew,Role,Survivor\n\
//!      BROWN/ Mrs Margaret ,44,1st Class,Passenger,,T\n",
//! );
//! let outcome = evaluate(manifest.records(), "clas:1st:surv");
//! assert_eq!(outcome.survivors(), 1);
//! ```

pub mod cli;
pub mod manifest;
pub mod observability;
pub mod query;
pub mod record;
