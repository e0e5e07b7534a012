//! Loads a tiny hand-built SQLite source through the real loader and
//! drives the Q1.1 filter/probe path end to end, checking the result
//! against a hand-computed expectation.

use rusqlite::Connection;
use ssb_engine::database::Database;
use ssb_engine::{index, probe};

fn toy_database() -> (tempfile::TempPath, Database) {
    let file = tempfile::NamedTempFile::new().unwrap();
    let path = file.into_temp_path();

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "
        CREATE TABLE part_encoded (c0, c1, c2, c3, c4);
        CREATE TABLE supplier_encoded (c0, c1, c2, c3, c4, c5);
        CREATE TABLE customer_encoded (c0, c1, c2, c3, c4, c5);
        CREATE TABLE date_encoded (c0, c1, c2, c3, c4, c5, c6, c7, c8, c9, c10, c11);
        CREATE TABLE lineorder (c0, c1, c2, c3, c4, c5, c6, c7, c8, c9, c10, c11, c12, c13);

        INSERT INTO date_encoded VALUES (19930101, 0, 0, 0, 1993, 199301, 1, 0, 0, 0, 0, 1);

        -- matches Q1.1: discount in [1,3], quantity < 25
        INSERT INTO lineorder VALUES (0, 0, 1, 1, 19930101, 0, 0, 0, 10, 1000, 0, 2, 0, 0);
        -- fails Q1.1 on quantity
        INSERT INTO lineorder VALUES (0, 0, 1, 1, 19930101, 0, 0, 0, 30, 1000, 0, 2, 0, 0);
        ",
    )
    .unwrap();
    drop(conn);

    let db = Database::load(path.to_str().unwrap()).unwrap();
    (path, db)
}

#[test]
fn q1_1_shape_matches_hand_computed_revenue() {
    let (_path, db) = toy_database();
    let lo = &db.lineorder;

    let hs_date = index::build_flat_set(db.date.len(), |i| {
        (db.date.year[i] == 1993).then_some(db.date.datekey[i])
    });

    let acc = probe::scan_and_aggregate(lo.len(), 1, |i, acc| {
        if lo.discount[i] >= 1 && lo.discount[i] <= 3 && lo.quantity[i] < 25 && hs_date.contains(&lo.orderdate[i]) {
            acc.update(0, lo.extendedprice[i] as i64 * lo.discount[i] as i64);
        }
    });

    assert_eq!(acc.sum_at(0), 2000);
}

#[test]
fn q1_2_shape_has_no_matches_for_this_toy_dataset() {
    let (_path, db) = toy_database();
    let lo = &db.lineorder;

    let hs_date = index::build_flat_set(db.date.len(), |i| {
        (db.date.yearmonthnum[i] == 199401).then_some(db.date.datekey[i])
    });

    let acc = probe::scan_and_aggregate(lo.len(), 1, |i, acc| {
        if lo.discount[i] >= 4 && lo.discount[i] <= 6 && hs_date.contains(&lo.orderdate[i]) {
            acc.update(0, lo.extendedprice[i] as i64 * lo.discount[i] as i64);
        }
    });

    assert!(!acc.is_present(0));
}

#[test]
fn running_the_same_query_twice_is_deterministic() {
    let (_path, db) = toy_database();
    let lo = &db.lineorder;

    let run = || {
        let hs_date = index::build_flat_set(db.date.len(), |i| {
            (db.date.year[i] == 1993).then_some(db.date.datekey[i])
        });
        probe::scan_and_aggregate(lo.len(), 1, |i, acc| {
            if lo.discount[i] >= 1 && lo.discount[i] <= 3 && lo.quantity[i] < 25 && hs_date.contains(&lo.orderdate[i]) {
                acc.update(0, lo.extendedprice[i] as i64 * lo.discount[i] as i64);
            }
        })
    };

    let first = run();
    let second = run();
    assert_eq!(first.sum_at(0), second.sum_at(0));
    assert_eq!(first.is_present(0), second.is_present(0));
}

#[test]
fn exactly_one_matching_row_yields_a_single_present_group() {
    let (_path, db) = toy_database();
    let lo = &db.lineorder;

    // Q1.1's toy dataset has exactly one row that survives the predicate.
    let hs_date = index::build_flat_set(db.date.len(), |i| {
        (db.date.year[i] == 1993).then_some(db.date.datekey[i])
    });

    let mut matches = 0;
    for i in 0..lo.len() {
        if lo.discount[i] >= 1 && lo.discount[i] <= 3 && lo.quantity[i] < 25 && hs_date.contains(&lo.orderdate[i]) {
            matches += 1;
        }
    }
    assert_eq!(matches, 1);
}

#[test]
fn loader_preserves_row_counts_and_partition_totals() {
    let (_path, db) = toy_database();
    assert_eq!(db.date.len(), 1);
    assert_eq!(db.lineorder.len(), 2);
    assert!(db.part.is_empty());

    let part_total: usize = db.part_partitions.iter().map(|p| p.len()).sum();
    let customer_total: usize = db.customer_partitions.iter().map(|c| c.len()).sum();
    assert_eq!(part_total, db.part.len());
    assert_eq!(customer_total, db.customer.len());
}
