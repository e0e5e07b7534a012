//! P3: every row of a partitioned mirror lands in partition `key % P`,
//! and partitioning never drops or duplicates rows.

use ssb_engine::model::{CustomerTable, PartTable};
use ssb_engine::partition::{self, NUM_PARTITIONS};

#[test]
fn part_partitions_cover_every_row_exactly_once() {
    let mut table = PartTable::default();
    for i in 0..2000u32 {
        table.push_row(i, (i % 3) as u8, (i % 4) as u8, (i % 500) as u16);
    }

    let partitions = partition::partition_part(&table);
    assert_eq!(partitions.len(), NUM_PARTITIONS);

    let total: usize = partitions.iter().map(|p| p.len()).sum();
    assert_eq!(total, table.len());

    for (p, bundle) in partitions.iter().enumerate() {
        for &key in &bundle.partkey {
            assert_eq!(key as usize % NUM_PARTITIONS, p);
        }
    }
}

#[test]
fn customer_partitions_cover_every_row_exactly_once() {
    let mut table = CustomerTable::default();
    for i in 0..1500u32 {
        table.push_row(i, (i % 250) as u8, (i % 25) as u8, (i % 5) as u8);
    }

    let partitions = partition::partition_customer(&table);
    let total: usize = partitions.iter().map(|c| c.len()).sum();
    assert_eq!(total, table.len());

    for (p, bundle) in partitions.iter().enumerate() {
        for &key in &bundle.custkey {
            assert_eq!(key as usize % NUM_PARTITIONS, p);
        }
    }
}
