#![cfg(feature = "records")]

use chrono::NaiveDate;
use iif::core::*;
use iif::export::to_iif;
use iif::records::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn chart() -> Vec<IifRecord> {
    vec![
        AccountBuilder::new("Checking", AccountType::Bank)
            .number("1000")
            .description("Operating account")
            .extra("NONE")
            .build()
            .into(),
        AccountBuilder::new("Consulting Income", AccountType::Income)
            .number("4000")
            .description("Services")
            .extra("NONE")
            .build()
            .into(),
    ]
}

fn invoice(doc: &str, day: u32, amount: rust_decimal::Decimal) -> Vec<IifRecord> {
    vec![
        TransactionBuilder::new("INVOICE", date(2024, 6, day), "Accounts Receivable", amount)
            .id(doc)
            .name("Kunde AG")
            .class("North")
            .doc_num(doc)
            .memo("June")
            .build()
            .into(),
        SplitBuilder::new("INVOICE", date(2024, 6, day), "Consulting Income", -amount)
            .id(doc)
            .name("Kunde AG")
            .class("North")
            .doc_num(doc)
            .memo("Beratung")
            .build()
            .into(),
    ]
}

fn books() -> Vec<IifRecord> {
    let mut records = invoice("1001", 15, dec!(1785));
    records.push(ClassBuilder::new("North").build().into());
    records.extend(invoice("1002", 30, dec!(250.5)));
    records.extend(chart());
    records
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

#[test]
fn typed_books_snapshot() {
    let out = to_iif(&books(), &IifConfig::default()).unwrap();
    insta::assert_snapshot!("typed_books", out);
}

// ---------------------------------------------------------------------------
// Structure
// ---------------------------------------------------------------------------

#[test]
fn trns_lines_precede_spl_lines() {
    let out = to_iif(&books(), &IifConfig::default()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    let end_header = lines.iter().position(|l| *l == "!ENDTRNS").unwrap();
    let data: Vec<&str> = lines[end_header + 1..lines.len() - 1]
        .iter()
        .map(|l| l.split('\t').next().unwrap())
        .collect();
    assert_eq!(data, vec!["TRNS", "TRNS", "SPL", "SPL"]);
}

#[test]
fn header_and_data_column_counts_match() {
    let records: Vec<IifRecord> = vec![
        AccountBuilder::new("A", AccountType::Equity).build().into(),
        InventoryItemBuilder::new("Hours", ItemType::Service)
            .account("Consulting Income")
            .price(dec!(150))
            .build()
            .into(),
        ClassBuilder::new("North").hidden(true).build().into(),
        CustomerBuilder::new("Kunde AG")
            .bill_to(["Marienplatz 1", "80331 München"])
            .email("rechnung@kunde.de")
            .limit(dec!(5000))
            .build()
            .into(),
        VendorBuilder::new("Lieferant GmbH").tax_id("12-3456789").build().into(),
    ];
    for rec in &records {
        let line = render(rec).unwrap();
        assert_eq!(
            line.header.split('\t').count(),
            line.data.split('\t').count(),
            "{} columns",
            rec.record_type()
        );
    }
}

#[test]
fn raw_and_typed_records_mix() {
    let records: Vec<IifRecord> = vec![
        RawRecord::new(RecordType::Cust).field("NAME", "Walk-in").into(),
        AccountBuilder::new("Checking", AccountType::Bank).build().into(),
    ];
    let out = to_iif(&records, &IifConfig::default()).unwrap();
    assert_eq!(
        out,
        "!ACCNT\tNAME\tACCNTTYPE\tDESC\tACCNUM\tEXTRA\nACCNT\tChecking\tBANK\t\t\t\n!CUST\tNAME\nCUST\tWalk-in"
    );
}

#[test]
fn typed_shapes_pass_header_check() {
    let strict = IifConfigBuilder::new()
        .check_headers(true)
        .missing_transactions(MissingTransactions::Error)
        .build();
    assert!(to_iif(&books(), &strict).is_ok());
}

#[test]
fn record_types() {
    let d = date(2024, 1, 1);
    let cases: Vec<(IifRecord, RecordType)> = vec![
        (AccountBuilder::new("a", "BANK").build().into(), RecordType::Accnt),
        (InventoryItemBuilder::new("i", ItemType::Discount).build().into(), RecordType::Invitem),
        (ClassBuilder::new("c").build().into(), RecordType::Class),
        (CustomerBuilder::new("c").build().into(), RecordType::Cust),
        (VendorBuilder::new("v").build().into(), RecordType::Vend),
        (TransactionBuilder::new("CHECK", d, "Checking", dec!(1)).build().into(), RecordType::Trns),
        (SplitBuilder::new("CHECK", d, "Rent", dec!(-1)).build().into(), RecordType::Spl),
    ];
    for (rec, expected) in cases {
        assert_eq!(rec.record_type(), expected);
    }
}

#[test]
fn records_serialize_with_serde() {
    let acc = AccountBuilder::new("Checking", AccountType::Bank).number("1000").build();
    let json = serde_json::to_string(&acc).unwrap();
    let back: Account = serde_json::from_str(&json).unwrap();
    assert_eq!(back, acc);
}
