use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use netbill_core::{CustomerId, DomainError, DomainResult, InvoiceId, Money};

/// An invoice raised against a customer.
///
/// Contributes one debit entry to the customer's statement, equal to its
/// total amount. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    /// Amount due, non-negative.
    pub total_amount: Money,
    pub issued_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub description: String,
}

impl Invoice {
    pub fn new(
        customer_id: CustomerId,
        total_amount: Money,
        issued_at: DateTime<Utc>,
        due_date: DateTime<Utc>,
        description: impl Into<String>,
    ) -> DomainResult<Self> {
        if total_amount.is_negative() {
            return Err(DomainError::invalid_amount(format!(
                "invoice amount must be non-negative, got {total_amount}"
            )));
        }
        let description = description.into();
        Ok(Self {
            id: InvoiceId::new(),
            customer_id,
            total_amount,
            issued_at,
            due_date,
            description: if description.is_empty() {
                "Invoice".to_string()
            } else {
                description
            },
        })
    }
}
