//! P2: `probe::scan_and_aggregate`'s result is independent of how rayon
//! splits the row range — it always matches a plain serial fold.

use ssb_engine::probe::scan_and_aggregate;

#[test]
fn parallel_scan_matches_serial_fold_with_grouping() {
    let n = 50_000;
    let keys: Vec<usize> = (0..n).map(|i| i % 16).collect();
    let values: Vec<i64> = (0..n as i64).collect();

    let acc = scan_and_aggregate(n, 16, |i, acc| {
        if values[i] % 2 == 0 {
            acc.update(keys[i], values[i]);
        }
    });

    for group in 0..16 {
        let expected: i64 = (0..n)
            .filter(|&i| keys[i] == group && values[i] % 2 == 0)
            .map(|i| values[i])
            .sum();
        let expected_present = (0..n).any(|i| keys[i] == group && values[i] % 2 == 0);

        assert_eq!(acc.sum_at(group), expected);
        assert_eq!(acc.is_present(group), expected_present);
    }
}

#[test]
fn disjoint_predicate_never_sets_present() {
    let acc = scan_and_aggregate(10_000, 4, |_, _| {});
    for i in 0..4 {
        assert!(!acc.is_present(i));
        assert_eq!(acc.sum_at(i), 0);
    }
}
