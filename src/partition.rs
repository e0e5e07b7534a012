//! Partitioned mirror builder (C2 in the spec's component table).
//!
//! `part` and `customer` are large enough that their per-query hash index
//! build benefits from being split across `P` independent partitions with
//! no cross-partition synchronization. Row *r* of the source table lands in
//! partition `key[r] % P`; this is a transient derived structure with the
//! same logical content as the flat table, rebuilt once at startup and then
//! read-only for the engine's lifetime.

use crate::model::{CustomerTable, PartTable};

/// Number of partitions in the mirror. Build and probe sides must agree on
/// this constant — it is not configurable per query.
pub const NUM_PARTITIONS: usize = 256;

pub fn partition_part(table: &PartTable) -> Vec<PartTable> {
    let mut partitions: Vec<PartTable> = (0..NUM_PARTITIONS).map(|_| PartTable::default()).collect();

    for i in 0..table.len() {
        let p = (table.partkey[i] % NUM_PARTITIONS as u32) as usize;
        partitions[p].push_row(table.partkey[i], table.mfgr[i], table.category[i], table.brand1[i]);
    }

    partitions
}

pub fn partition_customer(table: &CustomerTable) -> Vec<CustomerTable> {
    let mut partitions: Vec<CustomerTable> =
        (0..NUM_PARTITIONS).map(|_| CustomerTable::default()).collect();

    for i in 0..table.len() {
        let p = (table.custkey[i] % NUM_PARTITIONS as u32) as usize;
        partitions[p].push_row(table.custkey[i], table.city[i], table.nation[i], table.region[i]);
    }

    partitions
}
