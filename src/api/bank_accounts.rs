use tracing::debug;

use super::SuperFakturaClient;
use crate::core::{BankAccountList, BankAccountModel, Result};

const INDEX_ENDPOINT: &str = "bank_accounts/index";

/// Bank accounts of the invoicing company.
#[derive(Debug, Clone, Copy)]
pub struct BankAccounts<'a> {
    client: &'a SuperFakturaClient,
}

impl<'a> BankAccounts<'a> {
    pub(super) fn new(client: &'a SuperFakturaClient) -> Self {
        Self { client }
    }

    /// All bank accounts.
    pub async fn list(&self) -> Result<BankAccountList> {
        let list: BankAccountList = self.client.get_json(INDEX_ENDPOINT).await?;
        debug!(count = list.len(), "bank accounts listed");
        Ok(list)
    }

    /// The first account flagged as default.
    ///
    /// # Errors
    ///
    /// [`crate::core::SuperFakturaError::NoDefaultBankAccount`] when no account is flagged.
    pub async fn default(&self) -> Result<BankAccountModel> {
        self.list().await?.default_account()
    }
}
