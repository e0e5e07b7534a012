//! Q2.1-Q2.3: revenue by `(d_year, p_brand1)`, grouped over the `part` x
//! `supplier` x `date` x `lineorder` join. `part` is large enough to use
//! the partitioned mirror; `supplier` and `date` stay flat.

use std::fmt;

use crate::database::Database;
use crate::finalize;
use crate::index;
use crate::observability::{timed, PhaseLog};
use crate::probe;

const ACC_SIZE: usize = 512;

struct Row {
    d_year: u16,
    p_brand1: u16,
    sum_lo_revenue: i64,
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{:>4}|{}", self.d_year, self.p_brand1, self.sum_lo_revenue)
    }
}

fn decode(idx: usize) -> (u16, u16) {
    ((idx >> 6) as u16 + 1992, (idx & 0b111111) as u16 + 40)
}

fn run<C1, C2>(query: &str, db: &Database, log: &dyn PhaseLog, supplier_pred: C1, part_pred: C2)
where
    C1: Fn(usize) -> bool,
    C2: Fn(&crate::model::PartTable, usize) -> bool + Sync,
{
    let lo = &db.lineorder;

    let (hs_supplier, t) = timed(|| {
        index::build_flat_set(db.supplier.len(), |i| {
            supplier_pred(i).then_some(db.supplier.suppkey[i])
        })
    });
    log.record(query, "BuildHashSetSupplier", t);

    let (hm_part, t) = timed(|| {
        index::build_partitioned_map(
            &db.part_partitions,
            |p| p.len(),
            |p, j| part_pred(p, j).then_some((p.partkey[j], p.brand1[j])),
        )
    });
    log.record(query, "BuildHashMapPart", t);

    let (hm_date, t) = timed(|| {
        index::build_flat_map(db.date.len(), |i| Some((db.date.datekey[i], db.date.year[i])))
    });
    log.record(query, "BuildHashMapDate", t);

    let (acc, t) = timed(|| {
        probe::scan_and_aggregate(lo.len(), ACC_SIZE, |i, acc| {
            if let Some(&brand1) = index::partitioned_get(&hm_part, lo.partkey[i]) {
                if hs_supplier.contains(&lo.suppkey[i]) {
                    let year = *hm_date
                        .get(&lo.orderdate[i])
                        .expect("lineorder.orderdate must reference a loaded date row");
                    let idx = ((year as usize - 1992) << 6) | ((brand1 as usize - 40) & 0b111111);
                    acc.update(idx, lo.revenue[i] as i64);
                }
            }
        })
    });
    log.record(query, "Probe", t);

    let (mut rows, t) = timed(|| {
        let mut rows = finalize::finalize(&acc, decode);
        rows.sort_by(|a, b| a.0 .0.cmp(&b.0 .0).then(a.0 .1.cmp(&b.0 .1)));
        rows
    });
    log.record(query, "Finalize", t);

    let printed: Vec<Row> = rows
        .drain(..)
        .map(|((d_year, p_brand1), sum_lo_revenue)| Row { d_year, p_brand1, sum_lo_revenue })
        .collect();
    finalize::print_result(&printed);
}

pub fn q2_1(db: &Database, log: &dyn PhaseLog) {
    run(
        "Q2.1",
        db,
        log,
        |i| db.supplier.region[i] == 2,
        |p, j| p.category[j] == 2,
    );
}

pub fn q2_2(db: &Database, log: &dyn PhaseLog) {
    run(
        "Q2.2",
        db,
        log,
        |i| db.supplier.region[i] == 3,
        |p, j| p.brand1[j] >= 254 && p.brand1[j] <= 261,
    );
}

pub fn q2_3(db: &Database, log: &dyn PhaseLog) {
    run(
        "Q2.3",
        db,
        log,
        |i| db.supplier.region[i] == 4,
        |p, j| p.brand1[j] == 254,
    );
}

pub fn run_all(db: &Database, log: &dyn PhaseLog) {
    q2_1(db, log);
    q2_2(db, log);
    q2_3(db, log);
}
