//! Core SuperFaktura types: deployments, credentials, wire models and validation.
//!
//! Nothing in here touches the network; the [`crate::api`] module builds on
//! these types to talk to the service.

mod builder;
mod config;
mod environment;
mod error;
mod models;
mod types;
mod validation;

pub(crate) mod lenient;

pub use builder::*;
pub use config::*;
pub use environment::*;
pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
