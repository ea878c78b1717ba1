use std::io::Write;

use tracing::{info, warn};

use super::SuperFakturaClient;
use crate::core::{
    ClientContactModel, InvoiceItem, InvoiceModel, InvoicePayload, InvoiceResponse,
    InvoiceSettings, Language, Result,
};

const CREATE_ENDPOINT: &str = "invoices/create";

/// Invoice endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Invoices<'a> {
    client: &'a SuperFakturaClient,
}

impl<'a> Invoices<'a> {
    pub(super) fn new(client: &'a SuperFakturaClient) -> Self {
        Self { client }
    }

    /// Create an invoice for `contact` with the given lines.
    ///
    /// The client is created or matched by SuperFaktura as part of the call.
    /// API-level failures are reported in the returned [`InvoiceResponse`], not
    /// as an `Err`.
    ///
    /// # Errors
    ///
    /// Transport, HTTP status and decoding errors from [`SuperFakturaClient::post`].
    pub async fn add(
        &self,
        invoice: &InvoiceModel,
        items: &[InvoiceItem],
        contact: &ClientContactModel,
        settings: Option<&InvoiceSettings>,
    ) -> Result<InvoiceResponse> {
        let payload = InvoicePayload {
            invoice,
            items,
            client: contact,
            settings,
        };
        let data = serde_json::to_string(&payload)?;
        let body = self.client.post(CREATE_ENDPOINT, &data).await?;
        let resp = InvoiceResponse::from_value(&body);

        if resp.is_success() {
            info!(invoice_id = ?resp.invoice_id, "invoice created");
        } else {
            warn!(
                error = resp.error,
                message = %resp.error_message,
                "invoice rejected by API"
            );
        }
        Ok(resp)
    }

    /// Write the PDF of a created invoice to `writer`.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// [`crate::core::SuperFakturaError::MissingInvoiceReference`] if `invoice`
    /// has no id or token, otherwise the errors of [`SuperFakturaClient::download`].
    pub async fn download_pdf<W: Write + ?Sized>(
        &self,
        invoice: &InvoiceResponse,
        writer: &mut W,
        language: Language,
    ) -> Result<u64> {
        let endpoint = invoice.pdf_endpoint(language)?;
        self.client.download(&endpoint, writer).await
    }
}
