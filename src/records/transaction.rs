//! Transaction (TRNS) and split (SPL) records.
//!
//! A QuickBooks transaction is one TRNS line followed by one or more SPL
//! lines whose amounts balance it. The exporter writes all TRNS lines before
//! all SPL lines inside a single `!ENDTRNS` … `ENDTRNS` section.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{format_amount, format_date, format_flag, text};
use crate::core::{Field, Record, RecordType};

/// TRNS: transaction header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Option<String>,
    /// TRNSTYPE, e.g. "GENERAL JOURNAL", "INVOICE", "BILL", "CHECK".
    pub transaction_type: String,
    pub date: NaiveDate,
    pub account: String,
    /// Customer, vendor or other name.
    pub name: Option<String>,
    pub class: Option<String>,
    /// Signed amount: positive debits, negative credits.
    pub amount: Decimal,
    pub doc_num: Option<String>,
    pub memo: Option<String>,
    pub cleared: bool,
    pub to_print: bool,
}

impl Record for Transaction {
    fn record_type(&self) -> RecordType {
        RecordType::Trns
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("TRNSID", text(&self.id)),
            Field::new("TRNSTYPE", self.transaction_type.as_str()),
            Field::new("DATE", format_date(self.date)),
            Field::new("ACCNT", self.account.as_str()),
            Field::new("NAME", text(&self.name)),
            Field::new("CLASS", text(&self.class)),
            Field::new("AMOUNT", format_amount(self.amount)),
            Field::new("DOCNUM", text(&self.doc_num)),
            Field::new("MEMO", text(&self.memo)),
            Field::new("CLEAR", format_flag(self.cleared)),
            Field::new("TOPRINT", format_flag(self.to_print)),
        ]
    }
}

/// Builder for [`Transaction`].
pub struct TransactionBuilder {
    trns: Transaction,
}

impl TransactionBuilder {
    pub fn new(
        transaction_type: impl Into<String>,
        date: NaiveDate,
        account: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            trns: Transaction {
                id: None,
                transaction_type: transaction_type.into(),
                date,
                account: account.into(),
                name: None,
                class: None,
                amount,
                doc_num: None,
                memo: None,
                cleared: false,
                to_print: false,
            },
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.trns.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.trns.name = Some(name.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.trns.class = Some(class.into());
        self
    }

    pub fn doc_num(mut self, doc_num: impl Into<String>) -> Self {
        self.trns.doc_num = Some(doc_num.into());
        self
    }

    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.trns.memo = Some(memo.into());
        self
    }

    pub fn cleared(mut self, cleared: bool) -> Self {
        self.trns.cleared = cleared;
        self
    }

    pub fn to_print(mut self, to_print: bool) -> Self {
        self.trns.to_print = to_print;
        self
    }

    pub fn build(self) -> Transaction {
        self.trns
    }
}

/// SPL: transaction split line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub id: Option<String>,
    /// TRNSTYPE of the owning transaction.
    pub transaction_type: String,
    pub date: NaiveDate,
    pub account: String,
    pub name: Option<String>,
    pub class: Option<String>,
    /// Signed amount; splits of a transaction sum to the negated TRNS amount.
    pub amount: Decimal,
    pub doc_num: Option<String>,
    pub memo: Option<String>,
    pub cleared: bool,
}

impl Record for Split {
    fn record_type(&self) -> RecordType {
        RecordType::Spl
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("SPLID", text(&self.id)),
            Field::new("TRNSTYPE", self.transaction_type.as_str()),
            Field::new("DATE", format_date(self.date)),
            Field::new("ACCNT", self.account.as_str()),
            Field::new("NAME", text(&self.name)),
            Field::new("CLASS", text(&self.class)),
            Field::new("AMOUNT", format_amount(self.amount)),
            Field::new("DOCNUM", text(&self.doc_num)),
            Field::new("MEMO", text(&self.memo)),
            Field::new("CLEAR", format_flag(self.cleared)),
        ]
    }
}

/// Builder for [`Split`].
pub struct SplitBuilder {
    split: Split,
}

impl SplitBuilder {
    pub fn new(
        transaction_type: impl Into<String>,
        date: NaiveDate,
        account: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            split: Split {
                id: None,
                transaction_type: transaction_type.into(),
                date,
                account: account.into(),
                name: None,
                class: None,
                amount,
                doc_num: None,
                memo: None,
                cleared: false,
            },
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.split.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.split.name = Some(name.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.split.class = Some(class.into());
        self
    }

    pub fn doc_num(mut self, doc_num: impl Into<String>) -> Self {
        self.split.doc_num = Some(doc_num.into());
        self
    }

    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.split.memo = Some(memo.into());
        self
    }

    pub fn cleared(mut self, cleared: bool) -> Self {
        self.split.cleared = cleared;
        self
    }

    pub fn build(self) -> Split {
        self.split
    }
}
