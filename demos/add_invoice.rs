//! Create an invoice with two items and save its PDF to `invoice.pdf`.
//!
//! Needs `SUPERFAKTURA_*` credentials in the environment or a `.env` file;
//! point `SUPERFAKTURA_API_URL` at a sandbox while experimenting.

use std::fs::File;

use rust_decimal_macros::dec;
use superfaktura::api::SuperFakturaClient;
use superfaktura::core::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = SuperFakturaClient::from_env()?;

    let mut invoice = InvoiceBuilder::new("My First Invoice")
        .invoice_type(InvoiceType::Regular)
        .currency(Currency::Eur)
        .due(parse_date("2025-04-01")?)
        .header_comment("We invoice you for services");
    match client.bank_accounts().default().await {
        Ok(account) => invoice = invoice.bank_account(account),
        Err(e) => println!("Error getting default bank account: {e}"),
    }
    let invoice = invoice.build();

    let items = [
        InvoiceItemBuilder::new("Website Development", dec!(1000))
            .tax(dec!(20))
            .build(),
        InvoiceItemBuilder::new("Hosting Service (1 year)", dec!(500))
            .tax(dec!(20))
            .build(),
    ];

    let contact = ClientContactBuilder::new("John Doe")
        .email("john.doe@example.com")
        .phone("+1 555-1234")
        .address("123 Main Street", "New York", "10001")
        .ico("987654321")
        .country_id(225)
        .update(true)
        .build();

    for finding in validate_invoice(&invoice, &items, &contact) {
        println!("  Validation: {finding}");
    }

    let settings = InvoiceSettings::with_language(Language::English);
    let created = client
        .invoices()
        .add(&invoice, &items, &contact, Some(&settings))
        .await?;
    if !created.is_success() {
        println!("Invoice not created: {}", created.error_message);
        return Ok(());
    }
    println!("Created invoice {:?}", created.invoice_id);

    let mut file = File::create("invoice.pdf")?;
    let bytes = client
        .invoices()
        .download_pdf(&created, &mut file, Language::English)
        .await?;
    println!("Saved invoice.pdf ({bytes} bytes)");
    Ok(())
}
