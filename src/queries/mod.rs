//! Query drivers (C7): one module per SSB flight, each grounded directly
//! in that flight's join shape and bit-packing.

pub mod q1;
pub mod q2;
pub mod q3;
pub mod q4;

use crate::database::Database;
use crate::observability::PhaseLog;

/// Runs all 13 query variants in flight order, reporting phase timings
/// through `log` and printing each query's result to stdout as it
/// finishes.
pub fn run_all(db: &Database, log: &dyn PhaseLog) {
    q1::run_all(db, log);
    q2::run_all(db, log);
    q3::run_all(db, log);
    q4::run_all(db, log);
}
