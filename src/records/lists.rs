//! Account, item and class list records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{format_flag, format_opt_amount, format_opt_flag, text};
use crate::core::{Field, Record, RecordType};

/// QuickBooks account type codes (ACCNTTYPE column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AccountType {
    Bank,
    AccountsReceivable,
    OtherCurrentAsset,
    FixedAsset,
    OtherAsset,
    AccountsPayable,
    CreditCard,
    OtherCurrentLiability,
    LongTermLiability,
    Equity,
    Income,
    CostOfGoodsSold,
    Expense,
    OtherIncome,
    OtherExpense,
    NonPosting,
}

impl AccountType {
    /// IIF ACCNTTYPE code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Bank => "BANK",
            Self::AccountsReceivable => "AR",
            Self::OtherCurrentAsset => "OCASSET",
            Self::FixedAsset => "FIXASSET",
            Self::OtherAsset => "OASSET",
            Self::AccountsPayable => "AP",
            Self::CreditCard => "CCARD",
            Self::OtherCurrentLiability => "OCLIAB",
            Self::LongTermLiability => "LTLIAB",
            Self::Equity => "EQUITY",
            Self::Income => "INC",
            Self::CostOfGoodsSold => "COGS",
            Self::Expense => "EXP",
            Self::OtherIncome => "EXINC",
            Self::OtherExpense => "EXEXP",
            Self::NonPosting => "NONPOSTING",
        }
    }
}

impl From<AccountType> for String {
    fn from(t: AccountType) -> Self {
        t.code().to_string()
    }
}

/// ACCNT: chart of accounts entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    /// ACCNTTYPE, usually an [`AccountType`] code.
    pub account_type: String,
    pub description: Option<String>,
    pub number: Option<String>,
    /// EXTRA: special account marker (e.g. "UNDEPOSIT", "OPENBAL").
    pub extra: Option<String>,
}

impl Record for Account {
    fn record_type(&self) -> RecordType {
        RecordType::Accnt
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("NAME", self.name.as_str()),
            Field::new("ACCNTTYPE", self.account_type.as_str()),
            Field::new("DESC", text(&self.description)),
            Field::new("ACCNUM", text(&self.number)),
            Field::new("EXTRA", text(&self.extra)),
        ]
    }
}

/// Builder for [`Account`].
pub struct AccountBuilder {
    account: Account,
}

impl AccountBuilder {
    pub fn new(name: impl Into<String>, account_type: impl Into<String>) -> Self {
        Self {
            account: Account {
                name: name.into(),
                account_type: account_type.into(),
                description: None,
                number: None,
                extra: None,
            },
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.account.description = Some(desc.into());
        self
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.account.number = Some(number.into());
        self
    }

    pub fn extra(mut self, extra: impl Into<String>) -> Self {
        self.account.extra = Some(extra.into());
        self
    }

    pub fn build(self) -> Account {
        self.account
    }
}

/// QuickBooks item type codes (INVITEMTYPE column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ItemType {
    Service,
    Inventory,
    NonInventory,
    OtherCharge,
    Discount,
    Payment,
    SalesTax,
    SalesTaxGroup,
    Group,
    Subtotal,
}

impl ItemType {
    /// IIF INVITEMTYPE code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Service => "SERV",
            Self::Inventory => "INVENTORY",
            Self::NonInventory => "PART",
            Self::OtherCharge => "OTHC",
            Self::Discount => "DISC",
            Self::Payment => "PMT",
            Self::SalesTax => "COMPTAX",
            Self::SalesTaxGroup => "STAX",
            Self::Group => "GRP",
            Self::Subtotal => "SUBT",
        }
    }
}

/// INVITEM: item list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub item_type: ItemType,
    /// Sales description.
    pub description: Option<String>,
    pub purchase_description: Option<String>,
    /// Income account.
    pub account: Option<String>,
    pub asset_account: Option<String>,
    pub cogs_account: Option<String>,
    pub price: Option<Decimal>,
    pub cost: Option<Decimal>,
    pub taxable: Option<bool>,
}

impl Record for InventoryItem {
    fn record_type(&self) -> RecordType {
        RecordType::Invitem
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("NAME", self.name.as_str()),
            Field::new("INVITEMTYPE", self.item_type.code()),
            Field::new("DESC", text(&self.description)),
            Field::new("PURCHASEDESC", text(&self.purchase_description)),
            Field::new("ACCNT", text(&self.account)),
            Field::new("ASSETACCNT", text(&self.asset_account)),
            Field::new("COGSACCNT", text(&self.cogs_account)),
            Field::new("PRICE", format_opt_amount(self.price)),
            Field::new("COST", format_opt_amount(self.cost)),
            Field::new("TAXABLE", format_opt_flag(self.taxable)),
        ]
    }
}

/// Builder for [`InventoryItem`].
pub struct InventoryItemBuilder {
    item: InventoryItem,
}

impl InventoryItemBuilder {
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            item: InventoryItem {
                name: name.into(),
                item_type,
                description: None,
                purchase_description: None,
                account: None,
                asset_account: None,
                cogs_account: None,
                price: None,
                cost: None,
                taxable: None,
            },
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.item.description = Some(desc.into());
        self
    }

    pub fn purchase_description(mut self, desc: impl Into<String>) -> Self {
        self.item.purchase_description = Some(desc.into());
        self
    }

    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.item.account = Some(account.into());
        self
    }

    pub fn asset_account(mut self, account: impl Into<String>) -> Self {
        self.item.asset_account = Some(account.into());
        self
    }

    pub fn cogs_account(mut self, account: impl Into<String>) -> Self {
        self.item.cogs_account = Some(account.into());
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.item.price = Some(price);
        self
    }

    pub fn cost(mut self, cost: Decimal) -> Self {
        self.item.cost = Some(cost);
        self
    }

    pub fn taxable(mut self, taxable: bool) -> Self {
        self.item.taxable = Some(taxable);
        self
    }

    pub fn build(self) -> InventoryItem {
        self.item
    }
}

/// CLASS: class list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// Full class name; sub-classes use "Parent:Child".
    pub name: String,
    pub hidden: bool,
}

impl Record for Class {
    fn record_type(&self) -> RecordType {
        RecordType::Class
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("NAME", self.name.as_str()),
            Field::new("HIDDEN", format_flag(self.hidden)),
        ]
    }
}

/// Builder for [`Class`].
pub struct ClassBuilder {
    class: Class,
}

impl ClassBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            class: Class {
                name: name.into(),
                hidden: false,
            },
        }
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.class.hidden = hidden;
        self
    }

    pub fn build(self) -> Class {
        self.class
    }
}
