//! The generic half of the probe kernel (C5): a parallel reduction over a
//! row range that folds into worker-local accumulators and merges them
//! under the monoid in `accumulator.rs`. Each query driver supplies its own
//! `body` closure with its predicates, index probes, and slot/sum
//! expressions inlined — this function only owns the partitioning-and-merge
//! shape of the scan, matching the spec's note that probe-ordering and
//! predicate composition are per-query concerns, not the kernel's.

use rayon::prelude::*;

use crate::accumulator::Accumulator;

/// Scans `0..n`, calling `body(i, &mut acc)` for each row index against a
/// worker-local accumulator of the given `size`, then merges all
/// worker-local accumulators into one. Rayon chooses the sub-range split;
/// workers never share a mutable accumulator.
pub fn scan_and_aggregate<Body>(n: usize, size: usize, body: Body) -> Accumulator
where
    Body: Fn(usize, &mut Accumulator) + Sync,
{
    (0..n)
        .into_par_iter()
        .fold(
            || Accumulator::new(size),
            |mut acc, i| {
                body(i, &mut acc);
                acc
            },
        )
        .reduce(|| Accumulator::new(size), Accumulator::merge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_matches_serial_reduction_under_any_split() {
        let n = 10_000;
        let values: Vec<i64> = (0..n as i64).collect();

        let parallel = scan_and_aggregate(n, 1, |i, acc| {
            if values[i] % 3 == 0 {
                acc.update(0, values[i]);
            }
        });

        let serial: i64 = values.iter().filter(|&&v| v % 3 == 0).sum();
        assert_eq!(parallel.sum_at(0), serial);
        assert!(parallel.is_present(0));
    }

    #[test]
    fn empty_range_yields_absent_slots() {
        let acc = scan_and_aggregate(0, 4, |_, _| {});
        assert!(!acc.is_present(0));
    }
}
