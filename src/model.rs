//! Columnar table definitions (C1).
//!
//! Every table is a bundle of contiguous, positionally-aligned `Vec<uN>`
//! columns — no row struct is ever materialized. Row *i* of every column of
//! a table refers to the same logical row; this alignment is never broken
//! after `push`-only construction during load.

/// `part` dimension. `partkey` is unique.
#[derive(Debug, Clone, Default)]
pub struct PartTable {
    pub partkey: Vec<u32>,
    pub mfgr: Vec<u8>,
    pub category: Vec<u8>,
    pub brand1: Vec<u16>,
}

impl PartTable {
    pub fn len(&self) -> usize {
        self.partkey.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partkey.is_empty()
    }

    pub fn push_row(&mut self, partkey: u32, mfgr: u8, category: u8, brand1: u16) {
        self.partkey.push(partkey);
        self.mfgr.push(mfgr);
        self.category.push(category);
        self.brand1.push(brand1);
    }
}

/// `supplier` dimension. `suppkey` is unique.
#[derive(Debug, Clone, Default)]
pub struct SupplierTable {
    pub suppkey: Vec<u32>,
    pub city: Vec<u8>,
    pub nation: Vec<u8>,
    pub region: Vec<u8>,
}

impl SupplierTable {
    pub fn len(&self) -> usize {
        self.suppkey.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suppkey.is_empty()
    }

    pub fn push_row(&mut self, suppkey: u32, city: u8, nation: u8, region: u8) {
        self.suppkey.push(suppkey);
        self.city.push(city);
        self.nation.push(nation);
        self.region.push(region);
    }
}

/// `customer` dimension. `custkey` is unique.
#[derive(Debug, Clone, Default)]
pub struct CustomerTable {
    pub custkey: Vec<u32>,
    pub city: Vec<u8>,
    pub nation: Vec<u8>,
    pub region: Vec<u8>,
}

impl CustomerTable {
    pub fn len(&self) -> usize {
        self.custkey.len()
    }

    pub fn is_empty(&self) -> bool {
        self.custkey.is_empty()
    }

    pub fn push_row(&mut self, custkey: u32, city: u8, nation: u8, region: u8) {
        self.custkey.push(custkey);
        self.city.push(city);
        self.nation.push(nation);
        self.region.push(region);
    }
}

/// `date` dimension. `datekey` is unique.
#[derive(Debug, Clone, Default)]
pub struct DateTable {
    pub datekey: Vec<u32>,
    pub year: Vec<u16>,
    pub yearmonthnum: Vec<u32>,
    pub yearmonth: Vec<u32>,
    pub weeknuminyear: Vec<u8>,
}

impl DateTable {
    pub fn len(&self) -> usize {
        self.datekey.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datekey.is_empty()
    }

    pub fn push_row(
        &mut self,
        datekey: u32,
        year: u16,
        yearmonthnum: u32,
        yearmonth: u32,
        weeknuminyear: u8,
    ) {
        self.datekey.push(datekey);
        self.year.push(year);
        self.yearmonthnum.push(yearmonthnum);
        self.yearmonth.push(yearmonth);
        self.weeknuminyear.push(weeknuminyear);
    }
}

/// `lineorder` fact table. Foreign keys reference the corresponding
/// dimension `*key` columns; the loader is the only place integrity is
/// enforced (see spec §7) — the probe kernel trusts it.
#[derive(Debug, Clone, Default)]
pub struct Lineorder {
    pub custkey: Vec<u32>,
    pub partkey: Vec<u32>,
    pub suppkey: Vec<u32>,
    pub orderdate: Vec<u32>,
    pub quantity: Vec<u8>,
    pub extendedprice: Vec<u32>,
    pub discount: Vec<u8>,
    pub revenue: Vec<u32>,
    pub supplycost: Vec<u32>,
}

impl Lineorder {
    pub fn len(&self) -> usize {
        self.custkey.len()
    }

    pub fn is_empty(&self) -> bool {
        self.custkey.is_empty()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn push_row(
        &mut self,
        custkey: u32,
        partkey: u32,
        suppkey: u32,
        orderdate: u32,
        quantity: u8,
        extendedprice: u32,
        discount: u8,
        revenue: u32,
        supplycost: u32,
    ) {
        self.custkey.push(custkey);
        self.partkey.push(partkey);
        self.suppkey.push(suppkey);
        self.orderdate.push(orderdate);
        self.quantity.push(quantity);
        self.extendedprice.push(extendedprice);
        self.discount.push(discount);
        self.revenue.push(revenue);
        self.supplycost.push(supplycost);
    }
}
