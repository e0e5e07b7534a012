//! In-memory columnar engine executing the Star Schema Benchmark's Q1-Q4
//! query flights against a dictionary-encoded star schema.
//!
//! The crate is organized bottom-up: [`model`] defines the columnar
//! tables, [`partition`] derives the partitioned mirrors used for
//! concurrent index builds, [`accumulator`] and [`probe`] are the generic
//! reduction kernel every query rides on, [`index`] builds the hash
//! indices each query probes, [`finalize`] turns a finished accumulator
//! into sorted, printable rows, and [`queries`] wires all of that into the
//! 13 SSB query variants. [`loader`] and [`database`] own getting a
//! [`database::Database`] populated from a SQLite source file.

pub mod accumulator;
pub mod database;
pub mod error;
pub mod finalize;
pub mod index;
pub mod loader;
pub mod model;
pub mod observability;
pub mod partition;
pub mod probe;
pub mod queries;

pub use error::{DbError, Result};
