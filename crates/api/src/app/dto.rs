use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use netbill_billing::{ContactInfo, Customer, Invoice, Payment, PaymentMethod};
use netbill_core::CustomerId;
use netbill_statements::{CustomerStatement, amount_in_words};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterCustomerRequest {
    pub name: String,
    pub contact: Option<ContactInfo>,
    /// Carried-forward balance in paisa; defaults to zero.
    #[serde(default)]
    pub opening_balance_paisa: i64,
}

#[derive(Debug, Deserialize)]
pub struct RecordInvoiceRequest {
    pub amount_paisa: i64,
    pub issued_at: String, // RFC3339
    pub due_date: String,  // RFC3339
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecordPaymentRequest {
    pub invoice_id: String,
    pub amount_paisa: i64,
    pub received_at: String, // RFC3339
    pub method: PaymentMethod,
}

#[derive(Debug, Deserialize)]
pub struct AmountWordsQuery {
    pub paisa: i64,
}

// -------------------------
// Parsing helpers
// -------------------------

pub fn parse_rfc3339(
    field: &'static str,
    value: &str,
) -> Result<DateTime<Utc>, axum::response::Response> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| {
            errors::json_error(
                StatusCode::BAD_REQUEST,
                "validation_error",
                format!("{field} must be an RFC3339 timestamp: {e}"),
            )
        })
}

// -------------------------
// Response mapping
// -------------------------

pub fn customer_to_json(customer: &Customer) -> JsonValue {
    serde_json::json!({
        "id": customer.id.to_string(),
        "name": customer.name,
        "contact": customer.contact,
        "status": customer.status,
        "opening_balance_paisa": customer.opening_balance,
        "created_at": customer.created_at.to_rfc3339(),
    })
}

pub fn invoice_to_json(invoice: &Invoice) -> JsonValue {
    serde_json::json!({
        "id": invoice.id.to_string(),
        "customer_id": invoice.customer_id.to_string(),
        "amount_paisa": invoice.total_amount,
        "issued_at": invoice.issued_at.to_rfc3339(),
        "due_date": invoice.due_date.to_rfc3339(),
        "description": invoice.description,
    })
}

pub fn payment_to_json(payment: &Payment) -> JsonValue {
    serde_json::json!({
        "id": payment.id.to_string(),
        "customer_id": payment.customer_id.to_string(),
        "invoice_id": payment.invoice_id.to_string(),
        "amount_paisa": payment.amount,
        "received_at": payment.received_at.to_rfc3339(),
        "method": payment.method,
    })
}

pub fn statement_to_json(customer_id: CustomerId, statement: &CustomerStatement) -> JsonValue {
    serde_json::json!({
        "customer_id": customer_id.to_string(),
        "entries": statement.entries,
        "balance_paisa": statement.balance,
        // Receipt rendering; absent when the customer is in credit.
        "balance_in_words": amount_in_words(statement.balance).ok(),
    })
}
