use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use iif::core::*;
use iif::export::to_iif;
use iif::records::*;

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// 100 customers, 100 vendors and 1000 two-line journal entries, shuffled by type.
fn build_books() -> Vec<IifRecord> {
    let mut records: Vec<IifRecord> = Vec::new();
    for i in 1..=1000 {
        let amount = Decimal::new(i * 125, 2);
        records.push(
            TransactionBuilder::new("GENERAL JOURNAL", test_date(), "Checking", amount)
                .doc_num(format!("JE-{i:04}"))
                .build()
                .into(),
        );
        records.push(
            SplitBuilder::new("GENERAL JOURNAL", test_date(), "Sales", -amount)
                .memo(format!("Entry {i}"))
                .build()
                .into(),
        );
        if i % 10 == 0 {
            records.push(
                CustomerBuilder::new(format!("Customer {i}"))
                    .bill_to(["Main St 1", "Springfield"])
                    .limit(dec!(1000))
                    .build()
                    .into(),
            );
            records.push(VendorBuilder::new(format!("Vendor {i}")).build().into());
        }
    }
    records.push(AccountBuilder::new("Checking", AccountType::Bank).build().into());
    records.push(AccountBuilder::new("Sales", AccountType::Income).build().into());
    records
}

fn bench_to_iif(c: &mut Criterion) {
    let records = build_books();
    let config = IifConfig::default();
    c.bench_function("to_iif_2202_records", |b| {
        b.iter(|| black_box(to_iif(black_box(&records), &config)));
    });
}

fn bench_render(c: &mut Criterion) {
    let vendor = VendorBuilder::new("Vendor")
        .address(["Jon Vendor", "555", "Street St", "Anywhere, AZ 85730", "USA"])
        .build();
    c.bench_function("render_vendor", |b| {
        b.iter(|| black_box(render(black_box(&vendor))));
    });
}

fn bench_sort_group(c: &mut Criterion) {
    let lines: Vec<RenderedLine> = build_books().iter().map(|r| render(r).unwrap()).collect();
    c.bench_function("sort_and_group_2202_lines", |b| {
        b.iter(|| {
            let mut lines = lines.clone();
            sort_lines(&mut lines);
            black_box(group_lines(lines))
        });
    });
}

criterion_group!(benches, bench_to_iif, bench_render, bench_sort_group);
criterion_main!(benches);
