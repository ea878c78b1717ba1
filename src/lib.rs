//! # superfaktura
//!
//! Async client for the [SuperFaktura](https://www.superfaktura.sk) invoicing API.
//! It covers the national deployments (Slovakia, Czech Republic, Austria) and
//! both sandboxes.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point on
//! the Rust side. They are sent to the API as JSON numbers.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # #[cfg(feature = "client")]
//! # async fn run() -> superfaktura::Result<()> {
//! use superfaktura::api::SuperFakturaClient;
//! use superfaktura::core::*;
//! use rust_decimal_macros::dec;
//!
//! // Reads SUPERFAKTURA_API_KEY, _URL, _EMAIL and _COMPANY_ID (or a .env file).
//! let client = SuperFakturaClient::from_env()?;
//!
//! let bank = client.bank_accounts().default().await?;
//! let invoice = InvoiceBuilder::new("My First Invoice")
//!     .invoice_type(InvoiceType::Regular)
//!     .currency(Currency::Eur)
//!     .due(parse_date("2025-04-01")?)
//!     .bank_account(bank)
//!     .build();
//! let items = vec![InvoiceItemBuilder::new("Website Development", dec!(1000)).tax(dec!(20)).build()];
//! let contact = ClientContactBuilder::new("John Doe").email("john.doe@example.com").build();
//!
//! let created = client.invoices().add(&invoice, &items, &contact, None).await?;
//! let mut pdf = Vec::new();
//! client.invoices().download_pdf(&created, &mut pdf, Language::English).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Environments, configuration, wire models, builders, validation |
//! | `client` (default) | Async HTTP client and resource handles (`reqwest`) |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "client")]
pub mod api;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
