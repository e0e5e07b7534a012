//! Q4.1-Q4.3: profit (`revenue - supplycost`) grouped over the full
//! four-dimension join. Each variant narrows a different combination of
//! dimensions and groups at a different granularity.

use std::fmt;

use crate::database::Database;
use crate::finalize;
use crate::index;
use crate::observability::{timed, PhaseLog};
use crate::probe;

struct Q4P1Row {
    d_year: u16,
    c_nation: u8,
    sum_profit: i64,
}

impl fmt::Display for Q4P1Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.d_year, self.c_nation, self.sum_profit)
    }
}

const Q4_1_ACC_SIZE: usize = 256;

fn decode_q4_1(idx: usize) -> (u16, u8) {
    let d_year = (idx >> 5) as u16 + 1992;
    let c_nation = (idx & 0b11111) as u8;
    (d_year, c_nation)
}

pub fn q4_1(db: &Database, log: &dyn PhaseLog) {
    let lo = &db.lineorder;
    const ACC_SIZE: usize = Q4_1_ACC_SIZE;

    let (hm_date, t) = timed(|| {
        index::build_flat_map(db.date.len(), |i| Some((db.date.datekey[i], db.date.year[i])))
    });
    log.record("Q4.1", "BuildHashMapDate", t);

    let (hm_customer, t) = timed(|| {
        index::build_partitioned_map(
            &db.customer_partitions,
            |c| c.len(),
            |c, j| (c.region[j] == 2).then_some((c.custkey[j], c.nation[j])),
        )
    });
    log.record("Q4.1", "BuildHashMapCustomer", t);

    let (hs_supplier, t) = timed(|| {
        index::build_flat_set(db.supplier.len(), |i| {
            (db.supplier.region[i] == 2).then_some(db.supplier.suppkey[i])
        })
    });
    log.record("Q4.1", "BuildHashSetSupplier", t);

    let (hs_part, t) = timed(|| {
        index::build_partitioned_set(
            &db.part_partitions,
            |p| p.len(),
            |p, j| (p.mfgr[j] == 1 || p.mfgr[j] == 2).then_some(p.partkey[j]),
        )
    });
    log.record("Q4.1", "BuildHashSetPart", t);

    let (acc, t) = timed(|| {
        probe::scan_and_aggregate(lo.len(), ACC_SIZE, |i, acc| {
            if hs_supplier.contains(&lo.suppkey[i]) && index::partitioned_contains(&hs_part, lo.partkey[i]) {
                if let Some(&c_nation) = index::partitioned_get(&hm_customer, lo.custkey[i]) {
                    let year = *hm_date
                        .get(&lo.orderdate[i])
                        .expect("lineorder.orderdate must reference a loaded date row");
                    let idx = ((year as usize - 1992) << 5) | c_nation as usize;
                    acc.update(idx, lo.revenue[i] as i64 - lo.supplycost[i] as i64);
                }
            }
        })
    });
    log.record("Q4.1", "Probe", t);

    let (mut rows, t) = timed(|| {
        let mut rows = finalize::finalize(&acc, decode_q4_1);
        rows.sort_by(|a, b| a.0 .0.cmp(&b.0 .0).then(a.0 .1.cmp(&b.0 .1)));
        rows
    });
    log.record("Q4.1", "Finalize", t);

    let printed: Vec<Q4P1Row> = rows
        .drain(..)
        .map(|((d_year, c_nation), sum_profit)| Q4P1Row { d_year, c_nation, sum_profit })
        .collect();
    finalize::print_result(&printed);
}

struct Q4P2Row {
    d_year: u16,
    s_nation: u8,
    p_category: u8,
    sum_profit: i64,
}

impl fmt::Display for Q4P2Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}|{}", self.d_year, self.s_nation, self.p_category, self.sum_profit)
    }
}

const Q4_2_ACC_SIZE: usize = 1024;

fn decode_q4_2(idx: usize) -> (u16, u8, u8) {
    let d_year = (idx >> 9) as u16 + 1997;
    let s_nation = ((idx >> 4) & 0b11111) as u8;
    let p_category = (idx & 0b1111) as u8;
    (d_year, s_nation, p_category)
}

pub fn q4_2(db: &Database, log: &dyn PhaseLog) {
    let lo = &db.lineorder;
    const ACC_SIZE: usize = Q4_2_ACC_SIZE;

    let (hm_date, t) = timed(|| {
        index::build_flat_map(db.date.len(), |i| {
            (db.date.year[i] == 1997 || db.date.year[i] == 1998)
                .then_some((db.date.datekey[i], db.date.year[i]))
        })
    });
    log.record("Q4.2", "BuildHashMapDate", t);

    let (hs_customer, t) = timed(|| {
        index::build_partitioned_set(
            &db.customer_partitions,
            |c| c.len(),
            |c, j| (c.region[j] == 2).then_some(c.custkey[j]),
        )
    });
    log.record("Q4.2", "BuildHashSetCustomer", t);

    let (hm_supplier, t) = timed(|| {
        index::build_flat_map(db.supplier.len(), |i| {
            (db.supplier.region[i] == 2).then_some((db.supplier.suppkey[i], db.supplier.nation[i]))
        })
    });
    log.record("Q4.2", "BuildHashMapSupplier", t);

    let (hm_part, t) = timed(|| {
        index::build_partitioned_map(
            &db.part_partitions,
            |p| p.len(),
            |p, j| (p.mfgr[j] == 1 || p.mfgr[j] == 2).then_some((p.partkey[j], p.category[j])),
        )
    });
    log.record("Q4.2", "BuildHashMapPart", t);

    let (acc, t) = timed(|| {
        probe::scan_and_aggregate(lo.len(), ACC_SIZE, |i, acc| {
            if let Some(&s_nation) = hm_supplier.get(&lo.suppkey[i]) {
                if let Some(&year) = hm_date.get(&lo.orderdate[i]) {
                    if index::partitioned_contains(&hs_customer, lo.custkey[i]) {
                        if let Some(&p_category) = index::partitioned_get(&hm_part, lo.partkey[i]) {
                            let idx = ((year as usize - 1997) << 9)
                                | ((s_nation as usize) << 4)
                                | p_category as usize;
                            acc.update(idx, lo.revenue[i] as i64 - lo.supplycost[i] as i64);
                        }
                    }
                }
            }
        })
    });
    log.record("Q4.2", "Probe", t);

    let (mut rows, t) = timed(|| {
        let mut rows = finalize::finalize(&acc, decode_q4_2);
        rows.sort_by(|a, b| {
            a.0 .0.cmp(&b.0 .0).then(a.0 .1.cmp(&b.0 .1)).then(a.0 .2.cmp(&b.0 .2))
        });
        rows
    });
    log.record("Q4.2", "Finalize", t);

    let printed: Vec<Q4P2Row> = rows
        .drain(..)
        .map(|((d_year, s_nation, p_category), sum_profit)| Q4P2Row {
            d_year,
            s_nation,
            p_category,
            sum_profit,
        })
        .collect();
    finalize::print_result(&printed);
}

struct Q4P3Row {
    d_year: u16,
    s_city: u8,
    p_brand1: u16,
    sum_profit: i64,
}

impl fmt::Display for Q4P3Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}|{}", self.d_year, self.s_city, self.p_brand1, self.sum_profit)
    }
}

const Q4_3_ACC_SIZE: usize = 2048;

fn decode_q4_3(idx: usize) -> (u16, u8, u16) {
    let d_year = (idx >> 10) as u16 + 1997;
    let s_city = ((idx >> 6) & 0b1111) as u8 + 231;
    let p_brand1 = (idx & 0b111111) as u16 + 121;
    (d_year, s_city, p_brand1)
}

pub fn q4_3(db: &Database, log: &dyn PhaseLog) {
    let lo = &db.lineorder;
    const ACC_SIZE: usize = Q4_3_ACC_SIZE;

    let (hm_date, t) = timed(|| {
        index::build_flat_map(db.date.len(), |i| {
            (db.date.year[i] == 1997 || db.date.year[i] == 1998)
                .then_some((db.date.datekey[i], db.date.year[i]))
        })
    });
    log.record("Q4.3", "BuildHashMapDate", t);

    let (hs_customer, t) = timed(|| {
        index::build_partitioned_set(
            &db.customer_partitions,
            |c| c.len(),
            |c, j| (c.region[j] == 2).then_some(c.custkey[j]),
        )
    });
    log.record("Q4.3", "BuildHashSetCustomer", t);

    let (hm_supplier, t) = timed(|| {
        index::build_flat_map(db.supplier.len(), |i| {
            (db.supplier.nation[i] == 24).then_some((db.supplier.suppkey[i], db.supplier.city[i]))
        })
    });
    log.record("Q4.3", "BuildHashMapSupplier", t);

    let (hm_part, t) = timed(|| {
        index::build_partitioned_map(
            &db.part_partitions,
            |p| p.len(),
            |p, j| (p.category[j] == 4).then_some((p.partkey[j], p.brand1[j])),
        )
    });
    log.record("Q4.3", "BuildHashMapPart", t);

    let (acc, t) = timed(|| {
        probe::scan_and_aggregate(lo.len(), ACC_SIZE, |i, acc| {
            if let Some(&s_city) = hm_supplier.get(&lo.suppkey[i]) {
                if let Some(&year) = hm_date.get(&lo.orderdate[i]) {
                    if index::partitioned_contains(&hs_customer, lo.custkey[i]) {
                        if let Some(&p_brand1) = index::partitioned_get(&hm_part, lo.partkey[i]) {
                            let idx = ((year as usize - 1997) << 10)
                                | ((s_city as usize - 231) << 6)
                                | (p_brand1 as usize - 121);
                            acc.update(idx, lo.revenue[i] as i64 - lo.supplycost[i] as i64);
                        }
                    }
                }
            }
        })
    });
    log.record("Q4.3", "Probe", t);

    let (mut rows, t) = timed(|| {
        let mut rows = finalize::finalize(&acc, decode_q4_3);
        rows.sort_by(|a, b| {
            a.0 .0.cmp(&b.0 .0).then(a.0 .1.cmp(&b.0 .1)).then(a.0 .2.cmp(&b.0 .2))
        });
        rows
    });
    log.record("Q4.3", "Finalize", t);

    let printed: Vec<Q4P3Row> = rows
        .drain(..)
        .map(|((d_year, s_city, p_brand1), sum_profit)| Q4P3Row {
            d_year,
            s_city,
            p_brand1,
            sum_profit,
        })
        .collect();
    finalize::print_result(&printed);
}

pub fn run_all(db: &Database, log: &dyn PhaseLog) {
    q4_1(db, log);
    q4_2(db, log);
    q4_3(db, log);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn q4_1_pack_unpack_round_trips() {
        for idx in 0..Q4_1_ACC_SIZE {
            let (d_year, c_nation) = decode_q4_1(idx);
            let repacked = ((d_year as usize - 1992) << 5) | c_nation as usize;
            assert_eq!(repacked, idx);
        }
    }

    #[test]
    fn q4_2_pack_unpack_round_trips() {
        for idx in 0..Q4_2_ACC_SIZE {
            let (d_year, s_nation, p_category) = decode_q4_2(idx);
            let repacked =
                ((d_year as usize - 1997) << 9) | ((s_nation as usize) << 4) | p_category as usize;
            assert_eq!(repacked, idx);
        }
    }

    #[test]
    fn q4_3_pack_unpack_round_trips() {
        for idx in 0..Q4_3_ACC_SIZE {
            let (d_year, s_city, p_brand1) = decode_q4_3(idx);
            let repacked = ((d_year as usize - 1997) << 10)
                | ((s_city as usize - 231) << 6)
                | (p_brand1 as usize - 121);
            assert_eq!(repacked, idx);
        }
    }
}
