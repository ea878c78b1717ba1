use serde_json::Value;

use super::SuperFakturaClient;
use crate::core::Result;

/// Country list, used to look up `country_id` values for client contacts.
#[derive(Debug, Clone, Copy)]
pub struct Countries<'a> {
    client: &'a SuperFakturaClient,
}

impl<'a> Countries<'a> {
    pub(super) fn new(client: &'a SuperFakturaClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Value> {
        self.client.get("countries").await
    }
}
