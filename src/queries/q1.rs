//! Q1.1-Q1.3: revenue from `lineorder` rows whose order date and
//! discount/quantity band match, with no grouping — a single scalar.

use crate::database::Database;
use crate::index;
use crate::observability::{timed, PhaseLog};
use crate::probe;

fn run<C1, C2>(query: &str, db: &Database, log: &dyn PhaseLog, date_pred: C1, fact_pred: C2)
where
    C1: Fn(usize) -> bool,
    C2: Fn(usize) -> bool + Sync,
{
    let lo = &db.lineorder;

    let (hs_date, build_secs) = timed(|| {
        index::build_flat_set(db.date.len(), |i| date_pred(i).then_some(db.date.datekey[i]))
    });
    log.record(query, "BuildHashSetDate", build_secs);

    let (acc, probe_secs) = timed(|| {
        probe::scan_and_aggregate(lo.len(), 1, |i, acc| {
            if fact_pred(i) && hs_date.contains(&lo.orderdate[i]) {
                acc.update(0, lo.extendedprice[i] as i64 * lo.discount[i] as i64);
            }
        })
    });
    log.record(query, "Probe", probe_secs);

    println!("{}", acc.sum_at(0));
}

pub fn q1_1(db: &Database, log: &dyn PhaseLog) {
    run(
        "Q1.1",
        db,
        log,
        |i| db.date.year[i] == 1993,
        |i| {
            let lo = &db.lineorder;
            lo.discount[i] >= 1 && lo.discount[i] <= 3 && lo.quantity[i] < 25
        },
    );
}

pub fn q1_2(db: &Database, log: &dyn PhaseLog) {
    run(
        "Q1.2",
        db,
        log,
        |i| db.date.yearmonthnum[i] == 199401,
        |i| {
            let lo = &db.lineorder;
            lo.discount[i] >= 4 && lo.discount[i] <= 6 && lo.quantity[i] >= 26 && lo.quantity[i] <= 35
        },
    );
}

pub fn q1_3(db: &Database, log: &dyn PhaseLog) {
    run(
        "Q1.3",
        db,
        log,
        |i| db.date.weeknuminyear[i] == 6 && db.date.year[i] == 1994,
        |i| {
            let lo = &db.lineorder;
            lo.discount[i] >= 5 && lo.discount[i] <= 7 && lo.quantity[i] >= 36 && lo.quantity[i] <= 40
        },
    );
}

pub fn run_all(db: &Database, log: &dyn PhaseLog) {
    q1_1(db, log);
    q1_2(db, log);
    q1_3(db, log);
}
