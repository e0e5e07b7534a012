//! Packed accumulator (C4): a dense array of `(present, sum)` slots indexed
//! by a bit-packed group key. `merge` is the commutative/associative monoid
//! that lets the probe kernel reduce worker-local accumulators into one.

#[derive(Debug, Clone)]
pub struct Accumulator {
    present: Vec<bool>,
    sum: Vec<i64>,
}

impl Accumulator {
    /// `size` must be a power of two large enough to hold every packed key
    /// produced by the query's layout (see spec §4.5). Slots start
    /// `(false, 0)`.
    pub fn new(size: usize) -> Self {
        Self {
            present: vec![false; size],
            sum: vec![0; size],
        }
    }

    pub fn size(&self) -> usize {
        self.present.len()
    }

    /// Marks `idx` present and adds `delta` to its running sum.
    ///
    /// `idx` must be `< size()`; an out-of-range index is a key-layout bug
    /// (spec §7), not a recoverable condition.
    #[inline]
    pub fn update(&mut self, idx: usize, delta: i64) {
        debug_assert!(
            idx < self.present.len(),
            "accumulator slot {idx} out of range for size {}",
            self.present.len()
        );
        self.present[idx] = true;
        self.sum[idx] += delta;
    }

    pub fn is_present(&self, idx: usize) -> bool {
        self.present[idx]
    }

    pub fn sum_at(&self, idx: usize) -> i64 {
        self.sum[idx]
    }

    /// Iterates `(index, sum)` for every present slot, in index order.
    pub fn present_slots(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.present
            .iter()
            .enumerate()
            .filter(|(_, &p)| p)
            .map(|(i, _)| (i, self.sum[i]))
    }

    /// Element-wise OR on `present`, element-wise add on `sum`. Commutative
    /// and associative, so reduction order never affects the result.
    pub fn merge(mut self, other: Self) -> Self {
        assert_eq!(self.size(), other.size(), "cannot merge accumulators of different sizes");
        for i in 0..self.present.len() {
            self.present[i] = self.present[i] || other.present[i];
            self.sum[i] += other.sum[i];
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_accumulator(size: usize, updates: usize) -> Accumulator {
        let mut acc = Accumulator::new(size);
        let mut rng = rand::rng();
        for _ in 0..updates {
            let idx = rng.random_range(0..size);
            let delta = rng.random_range(-100..100);
            acc.update(idx, delta);
        }
        acc
    }

    fn same(a: &Accumulator, b: &Accumulator) -> bool {
        (0..a.size()).all(|i| a.is_present(i) == b.is_present(i) && a.sum_at(i) == b.sum_at(i))
    }

    #[test]
    fn merge_is_commutative_and_associative() {
        for _ in 0..20 {
            let a = random_accumulator(64, 50);
            let b = random_accumulator(64, 50);
            let c = random_accumulator(64, 50);

            let ab_c = a.clone().merge(b.clone()).merge(c.clone());
            let a_bc = a.clone().merge(b.clone().merge(c.clone()));
            assert!(same(&ab_c, &a_bc));

            let ab = a.clone().merge(b.clone());
            let ba = b.clone().merge(a.clone());
            assert!(same(&ab, &ba));
        }
    }

    #[test]
    fn merge_with_zero_is_identity() {
        let a = random_accumulator(32, 30);
        let zero = Accumulator::new(32);
        let merged = a.clone().merge(zero);
        assert!(same(&a, &merged));
    }

    #[test]
    fn update_only_moves_present_forward_and_sum_only_grows_with_positive_deltas() {
        let mut acc = Accumulator::new(4);
        assert!(!acc.is_present(2));
        acc.update(2, 5);
        assert!(acc.is_present(2));
        assert_eq!(acc.sum_at(2), 5);
        acc.update(2, 7);
        assert!(acc.is_present(2));
        assert_eq!(acc.sum_at(2), 12);
    }
}
