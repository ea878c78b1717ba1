use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::models::*;

/// Check an invoice draft before sending it to `invoices/create`.
/// Returns all findings (not just the first).
///
/// The API stays the authority: an empty result does not guarantee acceptance,
/// but every finding here would be rejected or produce a broken document.
pub fn validate_invoice(
    invoice: &InvoiceModel,
    items: &[InvoiceItem],
    contact: &ClientContactModel,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "invoice must have at least one item",
        ));
    }
    for (i, item) in items.iter().enumerate() {
        validate_item(item, &format!("items.{i}"), &mut errors);
    }

    validate_contact(contact, "client", &mut errors);

    if let Some(discount) = invoice.discount {
        check_percent(discount, "invoice.discount", &mut errors);
    }

    if let (Some(created), Some(due)) = (invoice.created, invoice.due) {
        if due < created {
            errors.push(ValidationError::new(
                "invoice.due",
                format!("due date {due} is before issue date {created}"),
            ));
        }
    }

    if let Some(email) = &invoice.issued_by_email {
        check_email(email, "invoice.issued_by_email", &mut errors);
    }

    if let Some(accounts) = &invoice.bank_accounts {
        for (i, account) in accounts.iter().enumerate() {
            let has_number = [&account.iban, &account.account]
                .into_iter()
                .flatten()
                .any(|s| !s.trim().is_empty());
            if !has_number && account.id.is_none() {
                errors.push(ValidationError::new(
                    format!("invoice.bank_accounts.{i}"),
                    "bank account needs an IBAN, an account number or an id",
                ));
            }
        }
    }

    errors
}

/// Check a client contact on its own, e.g. before `clients/create`.
pub fn validate_client_contact(contact: &ClientContactModel) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    validate_contact(contact, "client", &mut errors);
    errors
}

fn validate_item(item: &InvoiceItem, path: &str, errors: &mut Vec<ValidationError>) {
    // Stock items take their name from the stock record.
    let from_stock = item.load_data_from_stock.unwrap_or(false) && item.stock_item_id.is_some();
    if item.name.trim().is_empty() && !from_stock {
        errors.push(ValidationError::new(
            format!("{path}.name"),
            "item name must not be empty",
        ));
    }

    if item.quantity == Some(Decimal::ZERO) {
        errors.push(ValidationError::new(
            format!("{path}.quantity"),
            "quantity must not be zero",
        ));
    }

    if let Some(tax) = item.tax {
        check_percent(tax, &format!("{path}.tax"), errors);
    }

    if let Some(discount) = item.discount {
        check_percent(discount, &format!("{path}.discount"), errors);
    }
}

fn validate_contact(contact: &ClientContactModel, path: &str, errors: &mut Vec<ValidationError>) {
    if contact.name.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{path}.name"),
            "client name must not be empty",
        ));
    }
    if let Some(email) = &contact.email {
        check_email(email, &format!("{path}.email"), errors);
    }
}

fn check_percent(value: Decimal, field: &str, errors: &mut Vec<ValidationError>) {
    if value < Decimal::ZERO || value > dec!(100) {
        errors.push(ValidationError::new(
            field,
            format!("{value} is outside 0-100 %"),
        ));
    }
}

fn check_email(email: &str, field: &str, errors: &mut Vec<ValidationError>) {
    let valid = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && !domain.contains('@')
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    });
    if !valid {
        errors.push(ValidationError::new(
            field,
            format!("'{email}' is not an email address"),
        ));
    }
}
