use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::models::*;
use super::types::{Currency, InvoiceType};

/// Builder for invoice headers.
///
/// ```
/// use superfaktura::core::*;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new("My First Invoice")
///     .invoice_type(InvoiceType::Regular)
///     .currency(Currency::Eur)
///     .due(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap())
///     .header_comment("We invoice you for services")
///     .build();
/// assert_eq!(invoice.name.as_deref(), Some("My First Invoice"));
/// ```
pub struct InvoiceBuilder {
    invoice: InvoiceModel,
}

impl InvoiceBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            invoice: InvoiceModel {
                name: Some(name.into()),
                ..InvoiceModel::default()
            },
        }
    }

    pub fn invoice_type(mut self, invoice_type: InvoiceType) -> Self {
        self.invoice.invoice_type = Some(invoice_type);
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.invoice.invoice_currency = Some(currency);
        self
    }

    pub fn created(mut self, date: NaiveDate) -> Self {
        self.invoice.created = Some(date);
        self
    }

    pub fn delivery(mut self, date: NaiveDate) -> Self {
        self.invoice.delivery = Some(date);
        self
    }

    pub fn due(mut self, date: NaiveDate) -> Self {
        self.invoice.due = Some(date);
        self
    }

    pub fn paydate(mut self, date: NaiveDate) -> Self {
        self.invoice.paydate = Some(date);
        self
    }

    pub fn invoice_number(mut self, number: impl Into<String>) -> Self {
        self.invoice.invoice_no_formatted = Some(number.into());
        self
    }

    pub fn order_no(mut self, order_no: impl Into<String>) -> Self {
        self.invoice.order_no = Some(order_no.into());
        self
    }

    pub fn variable_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.invoice.variable = Some(symbol.into());
        self
    }

    pub fn constant_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.invoice.constant = Some(symbol.into());
        self
    }

    pub fn specific_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.invoice.specific = Some(symbol.into());
        self
    }

    pub fn header_comment(mut self, comment: impl Into<String>) -> Self {
        self.invoice.header_comment = Some(comment.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.invoice.comment = Some(comment.into());
        self
    }

    pub fn internal_comment(mut self, comment: impl Into<String>) -> Self {
        self.invoice.internal_comment = Some(comment.into());
        self
    }

    pub fn payment_type(mut self, payment_type: impl Into<String>) -> Self {
        self.invoice.payment_type = Some(payment_type.into());
        self
    }

    pub fn delivery_type(mut self, delivery_type: impl Into<String>) -> Self {
        self.invoice.delivery_type = Some(delivery_type.into());
        self
    }

    /// Discount in percent applied to the whole invoice.
    pub fn discount(mut self, percent: Decimal) -> Self {
        self.invoice.discount = Some(percent);
        self
    }

    pub fn deposit(mut self, amount: Decimal) -> Self {
        self.invoice.deposit = Some(amount);
        self
    }

    pub fn sequence_id(mut self, id: u64) -> Self {
        self.invoice.sequence_id = Some(id);
        self
    }

    pub fn issued_by(
        mut self,
        name: impl Into<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Self {
        self.invoice.issued_by = Some(name.into());
        self.invoice.issued_by_email = email;
        self.invoice.issued_by_phone = phone;
        self
    }

    /// Print `account` on the invoice. Can be called repeatedly.
    pub fn bank_account(mut self, account: BankAccountModel) -> Self {
        self.invoice
            .bank_accounts
            .get_or_insert_with(Vec::new)
            .push(account);
        self
    }

    pub fn already_paid(mut self, paid: bool) -> Self {
        self.invoice.already_paid = Some(paid);
        self
    }

    pub fn mark_sent(mut self, subject: impl Into<String>, message: impl Into<String>) -> Self {
        self.invoice.mark_sent = Some(true);
        self.invoice.mark_sent_subject = Some(subject.into());
        self.invoice.mark_sent_message = Some(message.into());
        self
    }

    pub fn proforma_id(mut self, id: impl Into<String>) -> Self {
        self.invoice.proforma_id = Some(id.into());
        self
    }

    pub fn vat_transfer(mut self, reverse_charge: bool) -> Self {
        self.invoice.vat_transfer = Some(reverse_charge);
        self
    }

    pub fn build(self) -> InvoiceModel {
        self.invoice
    }
}

/// Builder for invoice lines. Quantity defaults to 1.
pub struct InvoiceItemBuilder {
    item: InvoiceItem,
}

impl InvoiceItemBuilder {
    pub fn new(name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            item: InvoiceItem {
                name: name.into(),
                unit_price,
                description: None,
                discount: None,
                discount_description: None,
                load_data_from_stock: None,
                quantity: Some(Decimal::ONE),
                sku: None,
                stock_item_id: None,
                tax: None,
                unit: None,
                use_document_currency: None,
            },
        }
    }

    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.item.quantity = Some(quantity);
        self
    }

    /// VAT rate in percent.
    pub fn tax(mut self, rate: Decimal) -> Self {
        self.item.tax = Some(rate);
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.item.unit = Some(unit.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.item.description = Some(description.into());
        self
    }

    pub fn discount(mut self, percent: Decimal, description: Option<String>) -> Self {
        self.item.discount = Some(percent);
        self.item.discount_description = description;
        self
    }

    pub fn sku(mut self, sku: impl Into<String>) -> Self {
        self.item.sku = Some(sku.into());
        self
    }

    /// Take name and price from a stock item instead of this line.
    pub fn from_stock(mut self, stock_item_id: u64) -> Self {
        self.item.stock_item_id = Some(stock_item_id);
        self.item.load_data_from_stock = Some(true);
        self
    }

    pub fn use_document_currency(mut self, yes: bool) -> Self {
        self.item.use_document_currency = Some(yes);
        self
    }

    pub fn build(self) -> InvoiceItem {
        self.item
    }
}

/// Builder for client contacts.
pub struct ClientContactBuilder {
    contact: ClientContactModel,
}

impl ClientContactBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            contact: ClientContactModel {
                name: name.into(),
                ..ClientContactModel::default()
            },
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.contact.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.contact.phone = Some(phone.into());
        self
    }

    pub fn address(
        mut self,
        street: impl Into<String>,
        city: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        self.contact.address = Some(street.into());
        self.contact.city = Some(city.into());
        self.contact.zip = Some(zip.into());
        self
    }

    pub fn country_id(mut self, id: u64) -> Self {
        self.contact.country_id = Some(id);
        self
    }

    /// Company registration number (IČO).
    pub fn ico(mut self, ico: impl Into<String>) -> Self {
        self.contact.ico = Some(ico.into());
        self
    }

    /// Tax identification number (DIČ).
    pub fn dic(mut self, dic: impl Into<String>) -> Self {
        self.contact.dic = Some(dic.into());
        self
    }

    /// VAT identification number (IČ DPH).
    pub fn ic_dph(mut self, ic_dph: impl Into<String>) -> Self {
        self.contact.ic_dph = Some(ic_dph.into());
        self
    }

    pub fn iban(mut self, iban: impl Into<String>, swift: Option<String>) -> Self {
        self.contact.iban = Some(iban.into());
        self.contact.swift = swift;
        self
    }

    pub fn delivery_address(
        mut self,
        name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        self.contact.delivery_name = Some(name.into());
        self.contact.delivery_address = Some(street.into());
        self.contact.delivery_city = Some(city.into());
        self.contact.delivery_zip = Some(zip.into());
        self
    }

    /// Overwrite the stored client when it already exists.
    pub fn update(mut self, update: bool) -> Self {
        self.contact.update = Some(update);
        self
    }

    pub fn build(self) -> ClientContactModel {
        self.contact
    }
}
