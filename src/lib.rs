//! # iif
//!
//! Export of accounting records to IIF (Intuit Interchange Format), the
//! tab-delimited import format of QuickBooks Desktop.
//!
//! Records of any shape implementing [`core::Record`] are ordered by type
//! precedence (ACCNT, INVITEM, CLASS, CUST, VEND, TRNS, SPL), grouped into
//! blocks with one `!TYPE` header each, and written with transaction records
//! bracketed by `!ENDTRNS` / `ENDTRNS`.
//!
//! ## Quick Start
//!
//! ```rust
//! use iif::core::{IifConfig, RawRecord, RecordType};
//! use iif::export::to_iif;
//!
//! let records = vec![
//!     RawRecord::new(RecordType::Vend).field("NAME", "Vendor"),
//!     RawRecord::new(RecordType::Accnt)
//!         .field("NAME", "Accounts")
//!         .field("ACCNTTYPE", "AP"),
//! ];
//!
//! let iif = to_iif(&records, &IifConfig::default()).unwrap();
//! assert_eq!(iif, "!ACCNT\tNAME\tACCNTTYPE\nACCNT\tAccounts\tAP\n!VEND\tNAME\nVEND\tVendor");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `records` (default) | Typed QuickBooks record shapes with builders |
//! | `cli` | `iif-export` binary (JSON records → `.iif` file) |

pub mod core;
pub mod export;

#[cfg(feature = "records")]
pub mod records;

pub use crate::core::{IifConfig, IifError, Record, RecordType};
pub use crate::export::{export, to_iif};
