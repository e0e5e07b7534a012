//! Hash index builder (C3).
//!
//! Two flavors, per spec §4.3: *flat* — one hash set/map built by a
//! sequential scan, used for the small dimensions (`supplier`, `date`) —
//! and *partitioned* — `P` independent hash sets/maps, one per partition of
//! the mirror, built with no cross-partition synchronization, used for the
//! large dimensions (`part`, `customer`). Backed by `hashbrown`'s
//! open-addressing tables, which is what §4.3 asks for ("open addressing
//! with power-of-two capacity").

use hashbrown::{HashMap, HashSet};
use rayon::prelude::*;

use crate::partition::NUM_PARTITIONS;

/// Builds a flat hash set by scanning rows `0..n` and projecting each row
/// that passes the predicate to its key. `project` returns `None` to skip
/// a row (predicate false).
pub fn build_flat_set<F>(n: usize, mut project: F) -> HashSet<u32>
where
    F: FnMut(usize) -> Option<u32>,
{
    let mut set = HashSet::with_capacity(n);
    for i in 0..n {
        if let Some(key) = project(i) {
            set.insert(key);
        }
    }
    set
}

/// Builds a flat hash map the same way, projecting each surviving row to a
/// `(key, value)` pair. Dimension keys are unique, so no duplicate-key
/// policy is needed.
pub fn build_flat_map<V, F>(n: usize, mut project: F) -> HashMap<u32, V>
where
    F: FnMut(usize) -> Option<(u32, V)>,
{
    let mut map = HashMap::with_capacity(n);
    for i in 0..n {
        if let Some((key, value)) = project(i) {
            map.insert(key, value);
        }
    }
    map
}

/// Builds `P` independent hash sets in parallel, one per partition of a
/// partitioned mirror. `len` reports a partition's row count; `project`
/// inspects row `j` of partition `p` and returns its key if it passes the
/// predicate.
pub fn build_partitioned_set<T, Len, F>(partitions: &[T], len: Len, project: F) -> Vec<HashSet<u32>>
where
    T: Sync,
    Len: Fn(&T) -> usize + Sync,
    F: Fn(&T, usize) -> Option<u32> + Sync,
{
    partitions
        .par_iter()
        .map(|pt| {
            let n = len(pt);
            let mut set = HashSet::with_capacity(n);
            for j in 0..n {
                if let Some(key) = project(pt, j) {
                    set.insert(key);
                }
            }
            set
        })
        .collect()
}

/// Builds `P` independent hash maps in parallel, the projecting analogue
/// of [`build_partitioned_set`].
pub fn build_partitioned_map<T, V, Len, F>(
    partitions: &[T],
    len: Len,
    project: F,
) -> Vec<HashMap<u32, V>>
where
    T: Sync,
    V: Send,
    Len: Fn(&T) -> usize + Sync,
    F: Fn(&T, usize) -> Option<(u32, V)> + Sync,
{
    partitions
        .par_iter()
        .map(|pt| {
            let n = len(pt);
            let mut map = HashMap::with_capacity(n);
            for j in 0..n {
                if let Some((key, value)) = project(pt, j) {
                    map.insert(key, value);
                }
            }
            map
        })
        .collect()
}

/// Looks a fact-side key up in the partition selected by `key % P`, exactly
/// matching the build side's partitioning function.
#[inline]
pub fn partitioned_contains(sets: &[HashSet<u32>], key: u32) -> bool {
    sets[(key as usize) % NUM_PARTITIONS].contains(&key)
}

#[inline]
pub fn partitioned_get<'a, V>(maps: &'a [HashMap<u32, V>], key: u32) -> Option<&'a V> {
    maps[(key as usize) % NUM_PARTITIONS].get(&key)
}
