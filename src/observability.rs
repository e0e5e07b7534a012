//! Phase timing and structured logging (C8).
//!
//! Every query reports its build and probe phase durations twice: once as
//! ambient structured logging via `tracing`, for operators tailing the
//! process, and once as the timing line the benchmark harness actually
//! parses (`query,key,value` on stderr, or one JSON object per line when
//! `--json-logs` is set). `PhaseLog` is the seam between the two formats;
//! `timed` is the stopwatch every query driver wraps its phases in.

use std::time::Instant;

use serde::Serialize;

/// Records one `(query, phase, seconds)` triple per call. Implementations
/// own their own output format; callers never format timing lines
/// themselves.
pub trait PhaseLog {
    fn record(&self, query: &str, phase: &str, seconds: f64);
}

/// `query,key,value` on stderr — the wire format the original benchmark's
/// harness greps for.
pub struct PlainPhaseLog;

impl PhaseLog for PlainPhaseLog {
    fn record(&self, query: &str, phase: &str, seconds: f64) {
        tracing::debug!(query, phase, seconds, "phase complete");
        eprintln!("{query},{phase},{seconds}");
    }
}

#[derive(Serialize)]
struct PhaseRecord<'a> {
    query: &'a str,
    phase: &'a str,
    seconds: f64,
}

/// One JSON object per line on stderr, for consumers that parse with a
/// JSON decoder rather than splitting on commas.
pub struct JsonPhaseLog;

impl PhaseLog for JsonPhaseLog {
    fn record(&self, query: &str, phase: &str, seconds: f64) {
        tracing::debug!(query, phase, seconds, "phase complete");
        let record = PhaseRecord { query, phase, seconds };
        match serde_json::to_string(&record) {
            Ok(line) => eprintln!("{line}"),
            Err(e) => tracing::warn!(error = %e, "failed to serialize phase record"),
        }
    }
}

/// Runs `f`, returning its result alongside the elapsed wall time in
/// seconds.
pub fn timed<F, R>(f: F) -> (R, f64)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64())
}
