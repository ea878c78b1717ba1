use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::SuperFakturaClient;
use crate::core::{ClientContactModel, ClientPayload, Result, SuperFakturaError};

/// Message the API answers with when `clients/create` succeeds.
pub const CLIENT_CREATED: &str = "Client created";

/// Client (customer) contact endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ClientContacts<'a> {
    client: &'a SuperFakturaClient,
}

impl<'a> ClientContacts<'a> {
    pub(super) fn new(client: &'a SuperFakturaClient) -> Self {
        Self { client }
    }

    /// Create a contact. Returns `true` iff the API confirms with [`CLIENT_CREATED`].
    pub async fn add(&self, contact: &ClientContactModel) -> Result<bool> {
        let body: Value = self
            .client
            .post_json("clients/create", &ClientPayload { client: contact })
            .await?;
        let message = body
            .get("error_message")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let created = message == CLIENT_CREATED;
        if !created {
            warn!(message, "client contact not created");
        }
        Ok(created)
    }

    /// Raw listing of all contacts.
    pub async fn list(&self) -> Result<Value> {
        self.client.get("clients/index.json").await
    }

    /// Fetch one contact by id.
    ///
    /// # Errors
    ///
    /// [`SuperFakturaError::ClientNotFound`] if the response has no `Client` object.
    pub async fn get(&self, id: u64) -> Result<ClientContactModel> {
        let body = self.client.get(&format!("clients/view/{id}")).await?;
        let Some(client) = body.get("Client").filter(|c| c.is_object()) else {
            return Err(SuperFakturaError::ClientNotFound(id));
        };
        debug!(id, "client contact fetched");
        ClientContactModel::deserialize(client).map_err(|source| SuperFakturaError::Decode {
            body: body.to_string(),
            source,
        })
    }
}
