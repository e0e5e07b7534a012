//! SQLite loader (C2).
//!
//! The source data lives in a single SQLite database file, one table per
//! dimension plus `lineorder`, each already dictionary-encoded (small
//! integer codes in place of the original strings). Column positions below
//! mirror the source schema exactly — `SELECT *` and index by position,
//! rather than by name, since that's the schema's own contract.

use rusqlite::Connection;

use crate::error::Result;
use crate::model::{CustomerTable, DateTable, Lineorder, PartTable, SupplierTable};

pub fn load_part(conn: &Connection) -> Result<PartTable> {
    let mut stmt = conn.prepare("SELECT * FROM part_encoded")?;
    let mut table = PartTable::default();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        table.push_row(row.get(0)?, row.get(2)?, row.get(3)?, row.get(4)?);
    }
    Ok(table)
}

pub fn load_supplier(conn: &Connection) -> Result<SupplierTable> {
    let mut stmt = conn.prepare("SELECT * FROM supplier_encoded")?;
    let mut table = SupplierTable::default();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        table.push_row(row.get(0)?, row.get(3)?, row.get(4)?, row.get(5)?);
    }
    Ok(table)
}

pub fn load_customer(conn: &Connection) -> Result<CustomerTable> {
    let mut stmt = conn.prepare("SELECT * FROM customer_encoded")?;
    let mut table = CustomerTable::default();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        table.push_row(row.get(0)?, row.get(3)?, row.get(4)?, row.get(5)?);
    }
    Ok(table)
}

pub fn load_date(conn: &Connection) -> Result<DateTable> {
    let mut stmt = conn.prepare("SELECT * FROM date_encoded")?;
    let mut table = DateTable::default();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        table.push_row(row.get(0)?, row.get(4)?, row.get(5)?, row.get(6)?, row.get(11)?);
    }
    Ok(table)
}

pub fn load_lineorder(conn: &Connection) -> Result<Lineorder> {
    let mut stmt = conn.prepare("SELECT * FROM lineorder")?;
    let mut table = Lineorder::default();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        table.push_row(
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
            row.get(8)?,
            row.get(9)?,
            row.get(11)?,
            row.get(12)?,
            row.get(13)?,
        );
    }
    Ok(table)
}
