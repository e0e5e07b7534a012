//! Error taxonomy for the engine.
//!
//! Mirrors the three classes the spec calls out: configuration errors
//! (bad CLI usage), load errors (the external source cannot be read), and
//! internal invariant violations (a key-layout or lookup bug). Probe- and
//! finalize-time errors are never recoverable, so they are not represented
//! here at all — those paths assert or panic instead.

use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum DbError {
    #[snafu(display("usage error: {}", message))]
    Config { message: String },

    #[snafu(display("load error: {}", source))]
    Load { source: rusqlite::Error },

    #[snafu(display("internal error: {}", message))]
    Internal { message: String },
}

impl From<rusqlite::Error> for DbError {
    fn from(source: rusqlite::Error) -> Self {
        DbError::Load { source }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
