//! Units of time and reporting periods.
//!
//! A unit of time is one discrete day, month, quarter or year (or an
//! unbounded sentinel) interpreted as calendar, fiscal or generic time. Pairs
//! of units of the same kind form reporting periods, which support
//! containment, overlap and adjacency queries, granularity conversion and
//! splitting. Every value has a sortable string form whose lexical order is
//! its chronological order.
//!
//! The crate is arranged as follows:
//!
//! * `core` holds the crate-wide error type.
//! * `dates` holds the granularity lattice, the unit-of-time values, the
//!   sortable string codec and the reporting-period algebra.
//! * `data` holds timeseries of values tagged with reporting periods.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate tracing;
extern crate chrono;
extern crate derive_more;
extern crate regex;
extern crate serde;

pub mod core;
pub mod data;
pub mod dates;
