//! Tsdbline is a parser for the OpenTSDB line protocol. OpenTSDB moves
//! telemetry around as lines of text, one data point per line, in two
//! flavors: the plain wire format and the telnet API's `put` command.
//! Tsdbline converts one such line into a structured `DataPoint` --
//! metric name, millisecond timestamp, value and ordered tags -- or
//! reports a typed failure describing what could not be parsed.
//!
//! Why you might choose to use tsdbline:
//!
//!  * You ingest OpenTSDB telemetry and want structure, not strings.
//!  * You need tolerant parsing: leading noise and telnet `put`
//!    prefixes are skipped, not rejected.
//!  * You need deterministic tag ordering downstream.
//!
//! Tsdbline does no I/O of its own. Hosts own the sockets, the files
//! and the logger; this crate owns exactly one line at a time.
#![deny(trivial_numeric_casts, missing_docs, unstable_features, unused_import_braces)]
extern crate chrono;
extern crate regex;

#[macro_use]
extern crate log;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate serde_derive;

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
extern crate serde_json;
#[cfg(test)]
extern crate toml;

pub mod metric;
pub mod protocols;
