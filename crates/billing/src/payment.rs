use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use netbill_core::{CustomerId, DomainError, DomainResult, InvoiceId, Money, PaymentId};

/// How a payment reached us. Display form is what shows up on the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    Card,
    MobileWallet,
}

impl core::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Card => "Card",
            PaymentMethod::MobileWallet => "Mobile Wallet",
        };
        f.write_str(s)
    }
}

/// A payment received from a customer against an invoice.
///
/// Contributes one credit entry to the customer's statement, equal to its
/// amount. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub customer_id: CustomerId,
    pub invoice_id: InvoiceId,
    /// Amount received, non-negative.
    pub amount: Money,
    pub received_at: DateTime<Utc>,
    pub method: PaymentMethod,
}

impl Payment {
    pub fn new(
        customer_id: CustomerId,
        invoice_id: InvoiceId,
        amount: Money,
        received_at: DateTime<Utc>,
        method: PaymentMethod,
    ) -> DomainResult<Self> {
        if amount.is_negative() {
            return Err(DomainError::invalid_amount(format!(
                "payment amount must be non-negative, got {amount}"
            )));
        }
        Ok(Self {
            id: PaymentId::new(),
            customer_id,
            invoice_id,
            amount,
            received_at,
            method,
        })
    }
}
