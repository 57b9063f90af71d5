use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::IifError;

/// IIF record type tag.
///
/// The set is closed. Declaration order is the export order: list records
/// (accounts, items, classes, customers, vendors) precede transactions, and
/// transaction detail lines (`SPL`) follow their headers (`TRNS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// ACCNT: chart of accounts entry.
    Accnt,
    /// INVITEM: item list entry.
    Invitem,
    /// CLASS: class list entry.
    Class,
    /// CUST: customer list entry.
    Cust,
    /// VEND: vendor list entry.
    Vend,
    /// TRNS: transaction header line.
    Trns,
    /// SPL: transaction split (distribution) line.
    Spl,
}

impl RecordType {
    /// All record types in export order (rank 0 → 6).
    pub const ALL: [RecordType; 7] = [
        Self::Accnt,
        Self::Invitem,
        Self::Class,
        Self::Cust,
        Self::Vend,
        Self::Trns,
        Self::Spl,
    ];

    /// IIF type code as written in the file.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Accnt => "ACCNT",
            Self::Invitem => "INVITEM",
            Self::Class => "CLASS",
            Self::Cust => "CUST",
            Self::Vend => "VEND",
            Self::Trns => "TRNS",
            Self::Spl => "SPL",
        }
    }

    /// Parse from an IIF type code (exact, uppercase).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Export precedence; lower ranks are written first.
    pub fn rank(&self) -> usize {
        // discriminants follow declaration order
        *self as usize
    }

    /// Whether records of this type belong to the bracketed
    /// `!ENDTRNS` … `ENDTRNS` section.
    pub fn is_transaction(&self) -> bool {
        matches!(self, Self::Trns | Self::Spl)
    }
}

/// Export precedence of a raw type code, `None` if the code is unknown.
pub fn rank_of(code: &str) -> Option<usize> {
    RecordType::ALL.iter().position(|t| t.code() == code)
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RecordType {
    type Err = IifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| IifError::UnknownRecordType(s.to_string()))
    }
}
