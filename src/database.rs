//! Database assembly: loads every table from the SQLite source, then
//! builds the `part`/`customer` partitioned mirrors once, up front.
//! Everything downstream (index build, probe) only ever reads `Database`.

use rusqlite::Connection;

use crate::error::Result;
use crate::loader;
use crate::model::{CustomerTable, DateTable, Lineorder, PartTable, SupplierTable};
use crate::partition;

#[derive(Debug, Default)]
pub struct Database {
    pub part: PartTable,
    pub supplier: SupplierTable,
    pub customer: CustomerTable,
    pub date: DateTable,
    pub lineorder: Lineorder,

    pub part_partitions: Vec<PartTable>,
    pub customer_partitions: Vec<CustomerTable>,
}

impl Database {
    /// Opens `path` as a SQLite database and loads all five tables, then
    /// derives the `part`/`customer` partitioned mirrors from the loaded
    /// rows. The connection is closed before returning.
    pub fn load(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;

        let part = loader::load_part(&conn)?;
        let supplier = loader::load_supplier(&conn)?;
        let customer = loader::load_customer(&conn)?;
        let date = loader::load_date(&conn)?;
        let lineorder = loader::load_lineorder(&conn)?;

        let part_partitions = partition::partition_part(&part);
        let customer_partitions = partition::partition_customer(&customer);

        tracing::info!(
            parts = part.len(),
            suppliers = supplier.len(),
            customers = customer.len(),
            dates = date.len(),
            lineorders = lineorder.len(),
            "loaded database"
        );

        Ok(Self {
            part,
            supplier,
            customer,
            date,
            lineorder,
            part_partitions,
            customer_partitions,
        })
    }
}
