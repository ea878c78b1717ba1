use chrono::NaiveDate;
use rust_decimal_macros::dec;
use superfaktura::core::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn main() {
    // ── 1. A complete draft ───────────────────────────────────────────
    println!("=== Valid draft ===");
    let invoice = InvoiceBuilder::new("RE-2025-001")
        .currency(Currency::Eur)
        .build();
    let items = [InvoiceItemBuilder::new("Consulting", dec!(150))
        .quantity(dec!(10))
        .unit("h")
        .tax(dec!(20))
        .build()];
    let contact = ClientContactBuilder::new("Kunde s.r.o.")
        .email("fakturacia@kunde.sk")
        .build();
    let errors = validate_invoice(&invoice, &items, &contact);
    println!("  {} finding(s)", errors.len());

    // ── 2. Everything wrong at once ───────────────────────────────────
    println!("\n=== Broken draft ===");
    let invoice = InvoiceBuilder::new("RE-2025-002")
        .created(date(2025, 5, 1))
        .due(date(2025, 4, 1))
        .discount(dec!(150))
        .build();
    let items = [InvoiceItemBuilder::new("", dec!(10))
        .quantity(dec!(0))
        .tax(dec!(-20))
        .build()];
    let contact = ClientContactBuilder::new("").email("not-an-email").build();
    for e in validate_invoice(&invoice, &items, &contact) {
        println!("  {e}");
    }

    // ── 3. Date parsing ───────────────────────────────────────────────
    println!("\n=== Dates ===");
    for s in ["2025-04-01", "01.04.2025", "2025-02-30"] {
        match parse_date(s) {
            Ok(d) => println!("  {s} => {d}"),
            Err(e) => println!("  {s} => {e}"),
        }
    }
}
