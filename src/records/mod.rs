//! Typed QuickBooks record shapes.
//!
//! Each shape implements [`Record`] with a fixed column list, so every
//! record of one type shares a header. Non-text values are converted at the
//! field boundary: dates as `MM/DD/YYYY`, amounts with two decimals,
//! flags as `Y`/`N`.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use iif::core::IifConfig;
//! use iif::export::to_iif;
//! use iif::records::*;
//! use rust_decimal_macros::dec;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let records: Vec<IifRecord> = vec![
//!     AccountBuilder::new("Checking", AccountType::Bank).build().into(),
//!     TransactionBuilder::new("GENERAL JOURNAL", date, "Checking", dec!(100)).build().into(),
//!     SplitBuilder::new("GENERAL JOURNAL", date, "Sales", dec!(-100)).build().into(),
//! ];
//! let iif = to_iif(&records, &IifConfig::default()).unwrap();
//! assert!(iif.ends_with("ENDTRNS"));
//! ```

mod lists;
mod names;
mod transaction;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::{Field, RawRecord, Record, RecordType};

pub use lists::{
    Account, AccountBuilder, AccountType, Class, ClassBuilder, InventoryItem,
    InventoryItemBuilder, ItemType,
};
pub use names::{Customer, CustomerBuilder, PersonName, Vendor, VendorBuilder};
pub use transaction::{Split, SplitBuilder, Transaction, TransactionBuilder};

/// Any record this crate knows how to write, for heterogeneous collections.
#[derive(Debug, Clone)]
pub enum IifRecord {
    Account(Account),
    InventoryItem(InventoryItem),
    Class(Class),
    Customer(Customer),
    Vendor(Vendor),
    Transaction(Transaction),
    Split(Split),
    /// A record with runtime-defined columns.
    Raw(RawRecord),
}

impl Record for IifRecord {
    fn record_type(&self) -> RecordType {
        match self {
            Self::Account(r) => r.record_type(),
            Self::InventoryItem(r) => r.record_type(),
            Self::Class(r) => r.record_type(),
            Self::Customer(r) => r.record_type(),
            Self::Vendor(r) => r.record_type(),
            Self::Transaction(r) => r.record_type(),
            Self::Split(r) => r.record_type(),
            Self::Raw(r) => r.record_type(),
        }
    }

    fn fields(&self) -> Vec<Field<'_>> {
        match self {
            Self::Account(r) => r.fields(),
            Self::InventoryItem(r) => r.fields(),
            Self::Class(r) => r.fields(),
            Self::Customer(r) => r.fields(),
            Self::Vendor(r) => r.fields(),
            Self::Transaction(r) => r.fields(),
            Self::Split(r) => r.fields(),
            Self::Raw(r) => r.fields(),
        }
    }
}

macro_rules! impl_from_record {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for IifRecord {
                fn from(r: $variant) -> Self {
                    Self::$variant(r)
                }
            }
        )*
    };
}

impl_from_record!(Account, InventoryItem, Class, Customer, Vendor, Transaction, Split);

impl From<RawRecord> for IifRecord {
    fn from(r: RawRecord) -> Self {
        Self::Raw(r)
    }
}

/// Number of address columns per address block (ADDR1..ADDR5).
pub const ADDRESS_LINES: usize = 5;

/// Spread address lines over the five address columns. Lines beyond the
/// fifth are appended to the fifth, separated by ", ".
pub(crate) fn address_lines<I, S>(lines: I) -> [String; ADDRESS_LINES]
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: [String; ADDRESS_LINES] = Default::default();
    for (i, line) in lines.into_iter().enumerate() {
        let line = line.into();
        if i < ADDRESS_LINES {
            out[i] = line;
        } else {
            let last = &mut out[ADDRESS_LINES - 1];
            last.push_str(", ");
            last.push_str(&line);
        }
    }
    out
}

fn address_fields<'a>(names: &[&'static str; ADDRESS_LINES], lines: &'a [String]) -> Vec<Field<'a>> {
    names
        .iter()
        .zip(lines)
        .map(|(name, value)| Field::new(*name, value.as_str()))
        .collect()
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn format_date(d: NaiveDate) -> String {
    d.format("%m/%d/%Y").to_string()
}

fn format_amount(d: Decimal) -> String {
    format!("{:.2}", d.round_dp(2))
}

fn format_opt_amount(d: Option<Decimal>) -> String {
    d.map(format_amount).unwrap_or_default()
}

fn format_flag(b: bool) -> &'static str {
    if b { "Y" } else { "N" }
}

fn format_opt_flag(b: Option<bool>) -> &'static str {
    b.map(format_flag).unwrap_or("")
}
