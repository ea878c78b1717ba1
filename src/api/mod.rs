//! Async HTTP client for the SuperFaktura REST API.
//!
//! [`SuperFakturaClient`] handles authentication and the raw `GET`/`POST`/download
//! calls. The resource handles ([`Invoices`], [`BankAccounts`], [`ClientContacts`],
//! [`Countries`]) borrow a client and wrap individual endpoints.
//!
//! # Example
//!
//! ```no_run
//! use superfaktura::api::SuperFakturaClient;
//!
//! # async fn run() -> superfaktura::Result<()> {
//! let client = SuperFakturaClient::from_env()?;
//! let countries = client.countries().list().await?;
//! println!("{countries:#}");
//! # Ok(())
//! # }
//! ```

mod bank_accounts;
mod client;
mod clients;
mod countries;
mod invoices;

pub use bank_accounts::BankAccounts;
pub use client::{DEFAULT_TIMEOUT, SuperFakturaClient};
pub use clients::{CLIENT_CREATED, ClientContacts};
pub use countries::Countries;
pub use invoices::Invoices;
