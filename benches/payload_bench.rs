use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;
use serde_json::json;

use superfaktura::core::*;

fn build_invoice() -> (InvoiceModel, Vec<InvoiceItem>, ClientContactModel) {
    let invoice = InvoiceBuilder::new("Benchmark invoice")
        .invoice_type(InvoiceType::Regular)
        .currency(Currency::Eur)
        .due(parse_date("2025-04-01").unwrap())
        .header_comment("We invoice you for services")
        .bank_account(BankAccountModel {
            iban: Some("SK3111000000002612345678".into()),
            default: Some(true),
            ..Default::default()
        })
        .build();

    let items = (1..=10)
        .map(|i| {
            InvoiceItemBuilder::new(format!("Service item {i}"), dec!(125.50))
                .quantity(dec!(3))
                .tax(dec!(20))
                .unit("h")
                .build()
        })
        .collect();

    let contact = ClientContactBuilder::new("Kunde s.r.o.")
        .email("fakturacia@kunde.sk")
        .address("Hlavná 1", "Bratislava", "81101")
        .ico("12345678")
        .country_id(191)
        .build();

    (invoice, items, contact)
}

fn bench_payload_encoding(c: &mut Criterion) {
    let (invoice, items, contact) = build_invoice();
    let settings = InvoiceSettings::with_language(Language::Slovak);

    c.bench_function("encode_10_item_invoice_payload", |b| {
        b.iter(|| {
            let payload = InvoicePayload {
                invoice: black_box(&invoice),
                items: black_box(&items),
                client: black_box(&contact),
                settings: Some(&settings),
            };
            serde_json::to_string(&payload).unwrap()
        })
    });
}

fn bench_validation(c: &mut Criterion) {
    let (invoice, items, contact) = build_invoice();

    c.bench_function("validate_10_item_invoice", |b| {
        b.iter(|| validate_invoice(black_box(&invoice), black_box(&items), black_box(&contact)))
    });
}

fn bench_response_parsing(c: &mut Criterion) {
    let body = json!({
        "error": 0,
        "error_message": "Invoice created",
        "data": {"Invoice": {"id": "1234567", "token": "a1b2c3d4"}}
    });
    let entries: Vec<_> = (0..20)
        .map(|i| {
            let flag = if i == 19 { "1" } else { "0" };
            json!({"BankAccount": {"id": i.to_string(), "iban": "SK00", "default": flag}})
        })
        .collect();
    let bank_accounts = json!({ "BankAccounts": entries });

    c.bench_function("parse_invoice_response", |b| {
        b.iter(|| InvoiceResponse::from_value(black_box(&body)))
    });

    c.bench_function("select_default_bank_account", |b| {
        b.iter(|| {
            let list: BankAccountList = serde_json::from_value(black_box(bank_accounts.clone())).unwrap();
            list.default_account().unwrap()
        })
    });
}

fn bench_environment_lookup(c: &mut Criterion) {
    c.bench_function("parse_environment_selector", |b| {
        b.iter(|| {
            for s in ["sk", "cz", "at", "sandbox-sk", "sandbox-cz"] {
                black_box(s.parse::<Environment>().unwrap().base_url());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_payload_encoding,
    bench_validation,
    bench_response_parsing,
    bench_environment_lookup,
);
criterion_main!(benches);
