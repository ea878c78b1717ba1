//! Wire models for the invoice, client and bank account endpoints.
//!
//! Every optional field is omitted from outgoing JSON when `None`, so the API
//! applies its own defaults. Money is [`Decimal`] in Rust and a JSON number on
//! the wire.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::serde::{float, float_option};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::error::{Result, SuperFakturaError};
use super::lenient;
use super::types::{Currency, InvoiceType, Language};

/// An invoice header as sent to `invoices/create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceModel {
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "lenient::flag_as_int")]
    pub add_rounding_item: Option<bool>,
    /// Mark the invoice as already paid on creation.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "lenient::flag_as_int")]
    pub already_paid: Option<bool>,
    /// Bank accounts printed on the invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_accounts: Option<Vec<BankAccountModel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Constant symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constant: Option<String>,
    /// Issue date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDate>,
    /// Delivery date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "float_option::serialize")]
    pub deposit: Option<Decimal>,
    /// Discount in percent.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "float_option::serialize")]
    pub discount: Option<Decimal>,
    /// Absolute discount on the whole invoice.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "float_option::serialize")]
    pub discount_total: Option<Decimal>,
    /// Due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate_id: Option<u64>,
    /// Text printed above the items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_comment: Option<String>,
    /// Note visible only inside SuperFaktura.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_currency: Option<Currency>,
    /// Invoice number; SuperFaktura assigns one from the sequence when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_no_formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_by_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_by_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_by_web: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_id: Option<u64>,
    /// Mark the invoice as sent by email.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "lenient::flag_as_int")]
    pub mark_sent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_sent_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_sent_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    /// Payment date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paydate: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proforma_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_id: Option<u64>,
    /// Specific symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "lenient::flag_as_int")]
    pub tax_document: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub invoice_type: Option<InvoiceType>,
    /// Variable symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    /// Reverse charge (prenesenie daňovej povinnosti).
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "lenient::flag_as_int")]
    pub vat_transfer: Option<bool>,
}

/// A single invoice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub name: String,
    /// Net price per unit.
    #[serde(serialize_with = "float::serialize")]
    pub unit_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Discount in percent.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "float_option::serialize"
    )]
    pub discount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_flag",
        serialize_with = "lenient::flag_as_int"
    )]
    pub load_data_from_stock: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "float_option::serialize"
    )]
    pub quantity: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_u64"
    )]
    pub stock_item_id: Option<u64>,
    /// VAT rate in percent.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "float_option::serialize"
    )]
    pub tax: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_flag",
        serialize_with = "lenient::flag_as_int"
    )]
    pub use_document_currency: Option<bool>,
}

/// Rendering options for the invoice document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvoiceSettings {
    /// Language of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Print a Pay by Square QR code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bysquare: Option<bool>,
    /// URL notified when the invoice is paid online.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_payment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online_payment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paypal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_prices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_bg_color: Option<String>,
}

impl InvoiceSettings {
    /// Settings that only pick the document language.
    pub fn with_language(language: Language) -> Self {
        Self {
            language: Some(language),
            ..Self::default()
        }
    }
}

/// Outcome of `invoices/create`.
///
/// The API reports failures in-band (`error` != 0), so this is returned even
/// when the invoice was not created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceResponse {
    /// API error code; `0` means success.
    pub error: i64,
    pub error_message: String,
    pub invoice_id: Option<u64>,
    /// Token that authorizes downloads of this invoice.
    pub invoice_token: Option<String>,
}

impl InvoiceResponse {
    /// Interpret a decoded `invoices/create` response body.
    ///
    /// A missing or null `error` counts as a failure.
    pub fn from_value(value: &Value) -> Self {
        let error = match value.get("error") {
            Some(Value::Number(n)) => n.as_i64().unwrap_or(1),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(1),
            Some(Value::Bool(b)) => i64::from(*b),
            // A body without an error code is not a confirmation.
            _ => 1,
        };
        let error_message = match value.get("error_message") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };

        let invoice = value.get("data").and_then(|d| d.get("Invoice"));
        let invoice_id = invoice.and_then(|i| i.get("id")).and_then(|id| match id {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        });
        let invoice_token = invoice
            .and_then(|i| i.get("token"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            error,
            error_message,
            invoice_id,
            invoice_token,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error == 0
    }

    /// Endpoint serving the PDF of this invoice in `language`.
    ///
    /// # Errors
    ///
    /// [`SuperFakturaError::MissingInvoiceReference`] if the id or token is absent.
    pub fn pdf_endpoint(&self, language: Language) -> Result<String> {
        match (self.invoice_id, self.invoice_token.as_deref()) {
            (Some(id), Some(token)) if !token.is_empty() => Ok(format!(
                "{}/invoices/pdf/{}/token:{}",
                language.code(),
                id,
                token
            )),
            _ => Err(SuperFakturaError::MissingInvoiceReference),
        }
    }
}

/// A client (customer) contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientContactModel {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// SuperFaktura country id (see the `countries` endpoint).
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_u64"
    )]
    pub country_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_variable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_country: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_u64"
    )]
    pub delivery_country_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_zip: Option<String>,
    /// Tax identification number (DIČ).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dic: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "float_option::serialize"
    )]
    pub discount: Option<Decimal>,
    /// Default payment term in days.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_u64"
    )]
    pub due_date: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    /// VAT identification number (IČ DPH).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ic_dph: Option<String>,
    /// Company registration number (IČO).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ico: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_flag",
        serialize_with = "lenient::flag_as_int"
    )]
    pub match_address: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// Update the stored client with these details when it already exists.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_flag"
    )]
    pub update: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_u64"
    )]
    pub id: Option<u64>,
}

/// A bank account of the invoicing company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccountModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_flag",
        serialize_with = "lenient::flag_as_int"
    )]
    pub default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_flag",
        serialize_with = "lenient::flag_as_int"
    )]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_u64"
    )]
    pub id: Option<u64>,
}

impl BankAccountModel {
    pub fn is_default(&self) -> bool {
        self.default.unwrap_or(false)
    }
}

/// Body of `bank_accounts/index`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BankAccountList {
    #[serde(rename = "BankAccounts", default)]
    entries: Vec<BankAccountEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct BankAccountEntry {
    #[serde(rename = "BankAccount")]
    account: BankAccountModel,
}

impl BankAccountList {
    pub fn accounts(&self) -> impl Iterator<Item = &BankAccountModel> {
        self.entries.iter().map(|e| &e.account)
    }

    pub fn into_accounts(self) -> Vec<BankAccountModel> {
        self.entries.into_iter().map(|e| e.account).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first account flagged as default.
    ///
    /// # Errors
    ///
    /// [`SuperFakturaError::NoDefaultBankAccount`] when none is flagged.
    pub fn default_account(self) -> Result<BankAccountModel> {
        self.entries
            .into_iter()
            .map(|e| e.account)
            .find(BankAccountModel::is_default)
            .ok_or(SuperFakturaError::NoDefaultBankAccount)
    }
}

/// JSON document posted to `invoices/create`.
#[derive(Debug, Serialize)]
pub struct InvoicePayload<'a> {
    #[serde(rename = "Invoice")]
    pub invoice: &'a InvoiceModel,
    #[serde(rename = "InvoiceItem")]
    pub items: &'a [InvoiceItem],
    #[serde(rename = "Client")]
    pub client: &'a ClientContactModel,
    /// Sent as `{}` when absent.
    #[serde(rename = "InvoiceSetting", serialize_with = "settings_or_empty")]
    pub settings: Option<&'a InvoiceSettings>,
}

fn settings_or_empty<S: Serializer>(
    settings: &Option<&InvoiceSettings>,
    s: S,
) -> std::result::Result<S::Ok, S::Error> {
    match settings {
        Some(settings) => settings.serialize(s),
        None => InvoiceSettings::default().serialize(s),
    }
}

/// JSON document posted to `clients/create`.
#[derive(Debug, Serialize)]
pub struct ClientPayload<'a> {
    #[serde(rename = "Client")]
    pub client: &'a ClientContactModel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn empty_invoice_serializes_to_empty_object() {
        let json = serde_json::to_value(InvoiceModel::default()).unwrap();
        assert_eq!(json, json!({}));
    }

    #[test]
    fn invoice_omits_none_and_renames_type() {
        let invoice = InvoiceModel {
            name: Some("Web".into()),
            invoice_type: Some(InvoiceType::Proforma),
            due: NaiveDate::from_ymd_opt(2025, 4, 1),
            invoice_currency: Some(Currency::Eur),
            already_paid: Some(true),
            discount: Some(dec!(5.5)),
            ..Default::default()
        };
        let json = serde_json::to_value(&invoice).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "Web",
                "type": "proforma",
                "due": "2025-04-01",
                "invoice_currency": "EUR",
                "already_paid": 1,
                "discount": 5.5
            })
        );
    }

    #[test]
    fn item_prices_are_numbers() {
        let item = InvoiceItem {
            name: "Hosting".into(),
            unit_price: dec!(500.00),
            description: None,
            discount: None,
            discount_description: None,
            load_data_from_stock: None,
            quantity: Some(dec!(1)),
            sku: None,
            stock_item_id: None,
            tax: Some(dec!(20)),
            unit: None,
            use_document_currency: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["unit_price"], json!(500.0));
        assert_eq!(json["quantity"], json!(1.0));
        assert_eq!(json["tax"], json!(20.0));
        assert!(json.get("sku").is_none());
    }

    #[test]
    fn response_with_string_id() {
        let body = json!({
            "error": 0,
            "error_message": "Invoice created",
            "data": {"Invoice": {"id": "123", "token": "abc"}}
        });
        let resp = InvoiceResponse::from_value(&body);
        assert!(resp.is_success());
        assert_eq!(resp.invoice_id, Some(123));
        assert_eq!(resp.invoice_token.as_deref(), Some("abc"));
        assert_eq!(
            resp.pdf_endpoint(Language::English).unwrap(),
            "eng/invoices/pdf/123/token:abc"
        );
    }

    #[test]
    fn response_error_with_structured_message() {
        let body = json!({
            "error": 1,
            "error_message": {"name": ["Name is required"]}
        });
        let resp = InvoiceResponse::from_value(&body);
        assert!(!resp.is_success());
        assert!(resp.error_message.contains("Name is required"));
        assert_eq!(resp.invoice_id, None);
        assert!(matches!(
            resp.pdf_endpoint(Language::Slovak),
            Err(SuperFakturaError::MissingInvoiceReference)
        ));
    }

    #[test]
    fn response_without_error_code_is_not_success() {
        let bodies = [
            json!({}),
            json!([]),
            json!({"error": null}),
            json!({"data": {"Invoice": {"id": 1, "token": "t"}}}),
        ];
        for body in bodies {
            let resp = InvoiceResponse::from_value(&body);
            assert!(!resp.is_success(), "{body} must not count as success");
        }
    }

    #[test]
    fn client_contact_from_api_shape() {
        let body = json!({
            "id": "40019",
            "name": "John Doe",
            "country_id": "191",
            "due_date": 14,
            "match_address": "1",
            "discount": "2.5",
            "created": "2024-01-01 10:00:00",
            "email": null
        });
        let contact: ClientContactModel = serde_json::from_value(body).unwrap();
        assert_eq!(contact.id, Some(40019));
        assert_eq!(contact.country_id, Some(191));
        assert_eq!(contact.due_date, Some(14));
        assert_eq!(contact.match_address, Some(true));
        assert_eq!(contact.discount, Some(dec!(2.5)));
        assert_eq!(contact.email, None);
    }

    #[test]
    fn client_update_flag_stays_boolean() {
        let contact = ClientContactModel {
            name: "John Doe".into(),
            update: Some(true),
            country_id: Some(225),
            ..Default::default()
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json, json!({"name": "John Doe", "country_id": 225, "update": true}));
    }

    #[test]
    fn default_bank_account_is_first_flagged() {
        let body = json!({
            "BankAccounts": [
                {"BankAccount": {"id": "1", "iban": "SK00", "default": "0"}},
                {"BankAccount": {"id": "2", "iban": "SK11", "default": "1"}},
                {"BankAccount": {"id": "3", "iban": "SK22", "default": true}}
            ]
        });
        let list: BankAccountList = serde_json::from_value(body).unwrap();
        assert_eq!(list.len(), 3);
        let account = list.default_account().unwrap();
        assert_eq!(account.id, Some(2));
        assert_eq!(account.iban.as_deref(), Some("SK11"));
    }

    #[test]
    fn no_default_bank_account() {
        let body = json!({"BankAccounts": [{"BankAccount": {"id": 1, "default": 0}}]});
        let list: BankAccountList = serde_json::from_value(body).unwrap();
        assert!(matches!(
            list.default_account(),
            Err(SuperFakturaError::NoDefaultBankAccount)
        ));
        let empty: BankAccountList = serde_json::from_value(json!({})).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn payload_has_empty_settings_when_absent() {
        let invoice = InvoiceModel::default();
        let client = ClientContactModel {
            name: "X".into(),
            ..Default::default()
        };
        let payload = InvoicePayload {
            invoice: &invoice,
            items: &[],
            client: &client,
            settings: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            json!({"Invoice": {}, "InvoiceItem": [], "Client": {"name": "X"}, "InvoiceSetting": {}})
        );
    }

    #[test]
    fn payload_settings_language() {
        let invoice = InvoiceModel::default();
        let client = ClientContactModel::default();
        let settings = InvoiceSettings::with_language(Language::English);
        let payload = InvoicePayload {
            invoice: &invoice,
            items: &[],
            client: &client,
            settings: Some(&settings),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["InvoiceSetting"], json!({"language": "eng"}));
    }
}
