//! Customer and vendor name list records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ADDRESS_LINES, address_fields, address_lines, format_opt_amount, format_opt_flag, text};
use crate::core::{Field, Record, RecordType};

const BILL_TO: [&str; ADDRESS_LINES] = ["BADDR1", "BADDR2", "BADDR3", "BADDR4", "BADDR5"];
const SHIP_TO: [&str; ADDRESS_LINES] = ["SADDR1", "SADDR2", "SADDR3", "SADDR4", "SADDR5"];
const VENDOR_ADDR: [&str; ADDRESS_LINES] = ["ADDR1", "ADDR2", "ADDR3", "ADDR4", "ADDR5"];

/// Personal name parts shared by customers and vendors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub salutation: Option<String>,
    pub first: Option<String>,
    pub middle_initial: Option<String>,
    pub last: Option<String>,
}

/// CUST: customer list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub bill_to: [String; ADDRESS_LINES],
    pub ship_to: [String; ADDRESS_LINES],
    pub phone: Option<String>,
    pub alt_phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    /// CTYPE: customer type.
    pub customer_type: Option<String>,
    pub terms: Option<String>,
    pub taxable: Option<bool>,
    /// Credit limit.
    pub limit: Option<Decimal>,
    pub note: Option<String>,
    pub company_name: Option<String>,
    pub person: PersonName,
}

impl Record for Customer {
    fn record_type(&self) -> RecordType {
        RecordType::Cust
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![Field::new("NAME", self.name.as_str())];
        fields.extend(address_fields(&BILL_TO, &self.bill_to));
        fields.extend(address_fields(&SHIP_TO, &self.ship_to));
        fields.extend([
            Field::new("PHONE1", text(&self.phone)),
            Field::new("PHONE2", text(&self.alt_phone)),
            Field::new("FAXNUM", text(&self.fax)),
            Field::new("EMAIL", text(&self.email)),
            Field::new("CONT1", text(&self.contact)),
            Field::new("CTYPE", text(&self.customer_type)),
            Field::new("TERMS", text(&self.terms)),
            Field::new("TAXABLE", format_opt_flag(self.taxable)),
            Field::new("LIMIT", format_opt_amount(self.limit)),
            Field::new("NOTE", text(&self.note)),
            Field::new("COMPANYNAME", text(&self.company_name)),
            Field::new("FIRSTNAME", text(&self.person.first)),
            Field::new("MIDINIT", text(&self.person.middle_initial)),
            Field::new("LASTNAME", text(&self.person.last)),
        ]);
        fields
    }
}

/// Builder for [`Customer`].
pub struct CustomerBuilder {
    customer: Customer,
}

impl CustomerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            customer: Customer {
                name: name.into(),
                bill_to: Default::default(),
                ship_to: Default::default(),
                phone: None,
                alt_phone: None,
                fax: None,
                email: None,
                contact: None,
                customer_type: None,
                terms: None,
                taxable: None,
                limit: None,
                note: None,
                company_name: None,
                person: PersonName::default(),
            },
        }
    }

    /// Billing address lines; lines past the fifth are folded into the fifth.
    pub fn bill_to<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.customer.bill_to = address_lines(lines);
        self
    }

    /// Shipping address lines; lines past the fifth are folded into the fifth.
    pub fn ship_to<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.customer.ship_to = address_lines(lines);
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.customer.phone = Some(phone.into());
        self
    }

    pub fn alt_phone(mut self, phone: impl Into<String>) -> Self {
        self.customer.alt_phone = Some(phone.into());
        self
    }

    pub fn fax(mut self, fax: impl Into<String>) -> Self {
        self.customer.fax = Some(fax.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.customer.email = Some(email.into());
        self
    }

    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.customer.contact = Some(contact.into());
        self
    }

    pub fn customer_type(mut self, ctype: impl Into<String>) -> Self {
        self.customer.customer_type = Some(ctype.into());
        self
    }

    pub fn terms(mut self, terms: impl Into<String>) -> Self {
        self.customer.terms = Some(terms.into());
        self
    }

    pub fn taxable(mut self, taxable: bool) -> Self {
        self.customer.taxable = Some(taxable);
        self
    }

    pub fn limit(mut self, limit: Decimal) -> Self {
        self.customer.limit = Some(limit);
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.customer.note = Some(note.into());
        self
    }

    pub fn company_name(mut self, name: impl Into<String>) -> Self {
        self.customer.company_name = Some(name.into());
        self
    }

    pub fn person(mut self, person: PersonName) -> Self {
        self.customer.person = person;
        self
    }

    pub fn build(self) -> Customer {
        self.customer
    }
}

/// VEND: vendor list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub name: String,
    pub ref_num: Option<String>,
    /// Name printed on checks.
    pub print_as: Option<String>,
    pub address: [String; ADDRESS_LINES],
    /// VTYPE: vendor type.
    pub vendor_type: Option<String>,
    pub contact: Option<String>,
    pub alt_contact: Option<String>,
    pub phone: Option<String>,
    pub alt_phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub note: Option<String>,
    /// Tax ID for 1099 reporting.
    pub tax_id: Option<String>,
    /// Credit limit.
    pub limit: Option<Decimal>,
    pub terms: Option<String>,
    pub notepad: Option<String>,
    pub company_name: Option<String>,
    pub person: PersonName,
}

impl Record for Vendor {
    fn record_type(&self) -> RecordType {
        RecordType::Vend
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::new("NAME", self.name.as_str()),
            Field::new("REFNUM", text(&self.ref_num)),
            Field::new("PRINTAS", text(&self.print_as)),
        ];
        fields.extend(address_fields(&VENDOR_ADDR, &self.address));
        fields.extend([
            Field::new("VTYPE", text(&self.vendor_type)),
            Field::new("CONT1", text(&self.contact)),
            Field::new("CONT2", text(&self.alt_contact)),
            Field::new("PHONE1", text(&self.phone)),
            Field::new("PHONE2", text(&self.alt_phone)),
            Field::new("FAXNUM", text(&self.fax)),
            Field::new("EMAIL", text(&self.email)),
            Field::new("NOTE", text(&self.note)),
            Field::new("TAXID", text(&self.tax_id)),
            Field::new("LIMIT", format_opt_amount(self.limit)),
            Field::new("TERMS", text(&self.terms)),
            Field::new("NOTEPAD", text(&self.notepad)),
            Field::new("SALUTATION", text(&self.person.salutation)),
            Field::new("COMPANYNAME", text(&self.company_name)),
            Field::new("FIRSTNAME", text(&self.person.first)),
            Field::new("MIDINIT", text(&self.person.middle_initial)),
            Field::new("LASTNAME", text(&self.person.last)),
        ]);
        fields
    }
}

/// Builder for [`Vendor`].
pub struct VendorBuilder {
    vendor: Vendor,
}

impl VendorBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            vendor: Vendor {
                name: name.into(),
                ref_num: None,
                print_as: None,
                address: Default::default(),
                vendor_type: None,
                contact: None,
                alt_contact: None,
                phone: None,
                alt_phone: None,
                fax: None,
                email: None,
                note: None,
                tax_id: None,
                limit: None,
                terms: None,
                notepad: None,
                company_name: None,
                person: PersonName::default(),
            },
        }
    }

    pub fn ref_num(mut self, ref_num: impl Into<String>) -> Self {
        self.vendor.ref_num = Some(ref_num.into());
        self
    }

    pub fn print_as(mut self, print_as: impl Into<String>) -> Self {
        self.vendor.print_as = Some(print_as.into());
        self
    }

    /// Address lines; lines past the fifth are folded into the fifth.
    pub fn address<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vendor.address = address_lines(lines);
        self
    }

    pub fn vendor_type(mut self, vtype: impl Into<String>) -> Self {
        self.vendor.vendor_type = Some(vtype.into());
        self
    }

    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.vendor.contact = Some(contact.into());
        self
    }

    pub fn alt_contact(mut self, contact: impl Into<String>) -> Self {
        self.vendor.alt_contact = Some(contact.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.vendor.phone = Some(phone.into());
        self
    }

    pub fn alt_phone(mut self, phone: impl Into<String>) -> Self {
        self.vendor.alt_phone = Some(phone.into());
        self
    }

    pub fn fax(mut self, fax: impl Into<String>) -> Self {
        self.vendor.fax = Some(fax.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.vendor.email = Some(email.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.vendor.note = Some(note.into());
        self
    }

    pub fn tax_id(mut self, tax_id: impl Into<String>) -> Self {
        self.vendor.tax_id = Some(tax_id.into());
        self
    }

    pub fn limit(mut self, limit: Decimal) -> Self {
        self.vendor.limit = Some(limit);
        self
    }

    pub fn terms(mut self, terms: impl Into<String>) -> Self {
        self.vendor.terms = Some(terms.into());
        self
    }

    pub fn notepad(mut self, notepad: impl Into<String>) -> Self {
        self.vendor.notepad = Some(notepad.into());
        self
    }

    pub fn company_name(mut self, name: impl Into<String>) -> Self {
        self.vendor.company_name = Some(name.into());
        self
    }

    pub fn person(mut self, person: PersonName) -> Self {
        self.vendor.person = person;
        self
    }

    pub fn build(self) -> Vendor {
        self.vendor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render;

    #[test]
    fn vendor_header_has_all_columns() {
        let line = render(&VendorBuilder::new("Vendor").build()).unwrap();
        assert_eq!(
            line.header,
            "!VEND\tNAME\tREFNUM\tPRINTAS\tADDR1\tADDR2\tADDR3\tADDR4\tADDR5\tVTYPE\tCONT1\tCONT2\t\
             PHONE1\tPHONE2\tFAXNUM\tEMAIL\tNOTE\tTAXID\tLIMIT\tTERMS\tNOTEPAD\tSALUTATION\t\
             COMPANYNAME\tFIRSTNAME\tMIDINIT\tLASTNAME"
        );
        assert_eq!(line.header.split('\t').count(), 26);
    }

    #[test]
    fn vendor_data_keeps_column_positions() {
        let vendor = VendorBuilder::new("Vendor")
            .ref_num("1")
            .address(["Jon Vendor", "555", "Street St", "\"Anywhere, AZ 85730\"", "USA"])
            .contact("Jon Vendor")
            .phone("5555555555")
            .person(PersonName {
                first: Some("Jon".into()),
                last: Some("Vendor".into()),
                ..Default::default()
            })
            .build();
        let line = render(&vendor).unwrap();
        let cells: Vec<&str> = line.data.split('\t').collect();
        assert_eq!(cells.len(), 26);
        assert_eq!(cells[0], "VEND");
        assert_eq!(cells[4], "Jon Vendor");
        assert_eq!(cells[7], "\"Anywhere, AZ 85730\"");
        assert_eq!(cells[10], "Jon Vendor");
        assert_eq!(cells[12], "5555555555");
        assert_eq!(cells[23], "Jon");
        assert_eq!(cells[25], "Vendor");
    }

    #[test]
    fn customer_addresses_fill_both_blocks() {
        let cust = CustomerBuilder::new("Kunde")
            .bill_to(["1 Main St", "Springfield"])
            .ship_to(["Dock 4"])
            .taxable(false)
            .build();
        let line = render(&cust).unwrap();
        let names: Vec<&str> = line.header.split('\t').collect();
        let cells: Vec<&str> = line.data.split('\t').collect();
        assert_eq!(names.len(), cells.len());
        let col = |n: &str| names.iter().position(|h| *h == n).unwrap();
        assert_eq!(cells[col("BADDR1")], "1 Main St");
        assert_eq!(cells[col("BADDR2")], "Springfield");
        assert_eq!(cells[col("SADDR1")], "Dock 4");
        assert_eq!(cells[col("TAXABLE")], "N");
        assert_eq!(cells[col("LIMIT")], "");
    }
}
