//! Q3.1-Q3.4: revenue by `(customer_loc, supplier_loc, d_year)`, grouped
//! over the `customer` x `supplier` x `date` x `lineorder` join. Q3.1
//! groups by nation; Q3.2-Q3.4 share a city-level shape with different
//! predicates.

use std::fmt;

use crate::database::Database;
use crate::finalize;
use crate::index;
use crate::model::CustomerTable;
use crate::observability::{timed, PhaseLog};
use crate::probe;

const ACC_SIZE: usize = 8192;

fn sort_by_year_then_revenue_desc<K>(rows: &mut [(K, i64)], year_of: impl Fn(&K) -> u16) {
    rows.sort_by(|a, b| year_of(&a.0).cmp(&year_of(&b.0)).then(b.1.cmp(&a.1)));
}

struct NationRow {
    c_nation: u8,
    s_nation: u8,
    d_year: u16,
    sum_lo_revenue: i64,
}

impl fmt::Display for NationRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}|{}", self.c_nation, self.s_nation, self.d_year, self.sum_lo_revenue)
    }
}

fn decode_nation(idx: usize) -> (u8, u8, u16) {
    let c_nation = (idx >> 8) as u8;
    let s_nation = ((idx >> 3) & 0b11111) as u8;
    let d_year = (idx & 0b111) as u16 + 1992;
    (c_nation, s_nation, d_year)
}

pub fn q3_1(db: &Database, log: &dyn PhaseLog) {
    let lo = &db.lineorder;

    let (hm_customer, t) = timed(|| {
        index::build_partitioned_map(
            &db.customer_partitions,
            |c| c.len(),
            |c: &CustomerTable, j| (c.region[j] == 3).then_some((c.custkey[j], c.nation[j])),
        )
    });
    log.record("Q3.1", "BuildHashMapCustomer", t);

    let (hm_supplier, t) = timed(|| {
        index::build_flat_map(db.supplier.len(), |i| {
            (db.supplier.region[i] == 3).then_some((db.supplier.suppkey[i], db.supplier.nation[i]))
        })
    });
    log.record("Q3.1", "BuildHashMapSupplier", t);

    let (hm_date, t) = timed(|| {
        index::build_flat_map(db.date.len(), |i| {
            (db.date.year[i] >= 1992 && db.date.year[i] <= 1997)
                .then_some((db.date.datekey[i], db.date.year[i]))
        })
    });
    log.record("Q3.1", "BuildHashMapDate", t);

    let (acc, t) = timed(|| {
        probe::scan_and_aggregate(lo.len(), ACC_SIZE, |i, acc| {
            if let Some(&s_nation) = hm_supplier.get(&lo.suppkey[i]) {
                if let Some(&c_nation) = index::partitioned_get(&hm_customer, lo.custkey[i]) {
                    if let Some(&year) = hm_date.get(&lo.orderdate[i]) {
                        let idx = ((c_nation as usize) << 8)
                            | ((s_nation as usize) << 3)
                            | (year as usize - 1992);
                        acc.update(idx, lo.revenue[i] as i64);
                    }
                }
            }
        })
    });
    log.record("Q3.1", "Probe", t);

    let (mut rows, t) = timed(|| {
        let mut rows = finalize::finalize(&acc, decode_nation);
        sort_by_year_then_revenue_desc(&mut rows, |k| k.2);
        rows
    });
    log.record("Q3.1", "Finalize", t);

    let printed: Vec<NationRow> = rows
        .drain(..)
        .map(|((c_nation, s_nation, d_year), sum)| NationRow {
            c_nation,
            s_nation,
            d_year,
            sum_lo_revenue: sum,
        })
        .collect();
    finalize::print_result(&printed);
}

struct CityRow {
    c_city: u8,
    s_city: u8,
    d_year: u16,
    sum_lo_revenue: i64,
}

impl fmt::Display for CityRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}|{}", self.c_city, self.s_city, self.d_year, self.sum_lo_revenue)
    }
}

fn decode_city(idx: usize) -> (u8, u8, u16) {
    let c_city = (idx >> 8) as u8 + 221;
    let s_city = ((idx >> 3) & 0b11111) as u8 + 221;
    let d_year = (idx & 0b111) as u16 + 1992;
    (c_city, s_city, d_year)
}

fn run_city<C1, C2, C3>(
    query: &str,
    db: &Database,
    log: &dyn PhaseLog,
    customer_pred: C1,
    supplier_pred: C2,
    date_pred: C3,
) where
    C1: Fn(&CustomerTable, usize) -> bool + Sync,
    C2: Fn(usize) -> bool,
    C3: Fn(usize) -> bool,
{
    let lo = &db.lineorder;

    let (hm_customer, t) = timed(|| {
        index::build_partitioned_map(
            &db.customer_partitions,
            |c| c.len(),
            |c: &CustomerTable, j| customer_pred(c, j).then_some((c.custkey[j], c.city[j])),
        )
    });
    log.record(query, "BuildHashMapCustomer", t);

    let (hm_supplier, t) = timed(|| {
        index::build_flat_map(db.supplier.len(), |i| {
            supplier_pred(i).then_some((db.supplier.suppkey[i], db.supplier.city[i]))
        })
    });
    log.record(query, "BuildHashMapSupplier", t);

    let (hm_date, t) = timed(|| {
        index::build_flat_map(db.date.len(), |i| {
            date_pred(i).then_some((db.date.datekey[i], db.date.year[i]))
        })
    });
    log.record(query, "BuildHashMapDate", t);

    let (acc, t) = timed(|| {
        probe::scan_and_aggregate(lo.len(), ACC_SIZE, |i, acc| {
            if let Some(&s_city) = hm_supplier.get(&lo.suppkey[i]) {
                if let Some(&c_city) = index::partitioned_get(&hm_customer, lo.custkey[i]) {
                    if let Some(&year) = hm_date.get(&lo.orderdate[i]) {
                        let idx = ((c_city as usize - 221) << 8)
                            | ((s_city as usize - 221) << 3)
                            | (year as usize - 1992);
                        acc.update(idx, lo.revenue[i] as i64);
                    }
                }
            }
        })
    });
    log.record(query, "Probe", t);

    let (mut rows, t) = timed(|| {
        let mut rows = finalize::finalize(&acc, decode_city);
        sort_by_year_then_revenue_desc(&mut rows, |k| k.2);
        rows
    });
    log.record(query, "Finalize", t);

    let printed: Vec<CityRow> = rows
        .drain(..)
        .map(|((c_city, s_city, d_year), sum)| CityRow {
            c_city,
            s_city,
            d_year,
            sum_lo_revenue: sum,
        })
        .collect();
    finalize::print_result(&printed);
}

pub fn q3_2(db: &Database, log: &dyn PhaseLog) {
    run_city(
        "Q3.2",
        db,
        log,
        |c, j| c.nation[j] == 24,
        |i| db.supplier.nation[i] == 24,
        |i| db.date.year[i] >= 1992 && db.date.year[i] <= 1997,
    );
}

pub fn q3_3(db: &Database, log: &dyn PhaseLog) {
    run_city(
        "Q3.3",
        db,
        log,
        |c, j| c.city[j] == 222 || c.city[j] == 226,
        |i| db.supplier.city[i] == 222 || db.supplier.city[i] == 226,
        |i| db.date.year[i] >= 1992 && db.date.year[i] <= 1997,
    );
}

pub fn q3_4(db: &Database, log: &dyn PhaseLog) {
    run_city(
        "Q3.4",
        db,
        log,
        |c, j| c.city[j] == 222 || c.city[j] == 226,
        |i| db.supplier.city[i] == 222 || db.supplier.city[i] == 226,
        |i| db.date.yearmonth[i] == 20,
    );
}

pub fn run_all(db: &Database, log: &dyn PhaseLog) {
    q3_1(db, log);
    q3_2(db, log);
    q3_3(db, log);
    q3_4(db, log);
}

#[cfg(test)]
mod tests {
    use super::{decode_city, decode_nation};

    #[test]
    fn nation_pack_unpack_round_trips_over_the_full_slot_space() {
        for idx in 0..super::ACC_SIZE {
            let (c_nation, s_nation, d_year) = decode_nation(idx);
            let repacked = ((c_nation as usize) << 8)
                | ((s_nation as usize) << 3)
                | (d_year as usize - 1992);
            assert_eq!(repacked, idx);
        }
    }

    #[test]
    fn city_pack_unpack_round_trips_over_the_full_slot_space() {
        for idx in 0..super::ACC_SIZE {
            let (c_city, s_city, d_year) = decode_city(idx);
            let repacked = ((c_city as usize - 221) << 8)
                | ((s_city as usize - 221) << 3)
                | (d_year as usize - 1992);
            assert_eq!(repacked, idx);
        }
    }
}
