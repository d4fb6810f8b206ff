use std::{
    collections::HashMap,
    sync::Mutex,
};

use chrono::{DateTime, Utc};

use netbill_billing::{ContactInfo, Customer, Invoice, Payment, PaymentMethod};
use netbill_core::{CustomerId, DomainError, DomainResult, InvoiceId, Money};
use netbill_statements::{CustomerStatement, OpeningBalance, reconstruct};

/// In-memory billing records keyed by customer.
///
/// This stands in for the persistence collaborator: it fetches and holds
/// records, the statement engine only computes over them. Swapping in a real
/// store touches this type and nothing in `netbill-statements`.
#[derive(Debug, Default)]
pub struct AppServices {
    customers: Mutex<HashMap<CustomerId, Customer>>,
    invoices: Mutex<HashMap<CustomerId, Vec<Invoice>>>,
    payments: Mutex<HashMap<CustomerId, Vec<Payment>>>,
}

impl AppServices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_customer(
        &self,
        name: String,
        contact: Option<ContactInfo>,
        opening_balance: Money,
    ) -> DomainResult<Customer> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("customer name must not be empty"));
        }
        let mut customer = Customer::new(name, opening_balance, Utc::now());
        if let Some(contact) = contact {
            customer = customer.with_contact(contact);
        }
        self.customers
            .lock()
            .unwrap()
            .insert(customer.id, customer.clone());
        tracing::info!(customer_id = %customer.id, "customer registered");
        Ok(customer)
    }

    pub fn customer_get(&self, id: CustomerId) -> Option<Customer> {
        self.customers.lock().unwrap().get(&id).cloned()
    }

    pub fn customer_list(&self) -> Vec<Customer> {
        let mut items: Vec<Customer> = self.customers.lock().unwrap().values().cloned().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    pub fn record_invoice(
        &self,
        customer_id: CustomerId,
        amount: Money,
        issued_at: DateTime<Utc>,
        due_date: DateTime<Utc>,
        description: String,
    ) -> DomainResult<Invoice> {
        if self.customer_get(customer_id).is_none() {
            return Err(DomainError::not_found());
        }
        let invoice = Invoice::new(customer_id, amount, issued_at, due_date, description)?;
        self.invoices
            .lock()
            .unwrap()
            .entry(customer_id)
            .or_default()
            .push(invoice.clone());
        Ok(invoice)
    }

    pub fn record_payment(
        &self,
        customer_id: CustomerId,
        invoice_id: InvoiceId,
        amount: Money,
        received_at: DateTime<Utc>,
        method: PaymentMethod,
    ) -> DomainResult<Payment> {
        if self.customer_get(customer_id).is_none() {
            return Err(DomainError::not_found());
        }
        let invoice_known = self
            .invoices
            .lock()
            .unwrap()
            .get(&customer_id)
            .is_some_and(|items| items.iter().any(|i| i.id == invoice_id));
        if !invoice_known {
            return Err(DomainError::validation(format!(
                "invoice {invoice_id} not found for customer {customer_id}"
            )));
        }
        let payment = Payment::new(customer_id, invoice_id, amount, received_at, method)?;
        self.payments
            .lock()
            .unwrap()
            .entry(customer_id)
            .or_default()
            .push(payment.clone());
        Ok(payment)
    }

    /// Reconstruct the customer's statement from whatever is on file.
    pub fn statement_for(&self, customer_id: CustomerId) -> DomainResult<CustomerStatement> {
        let customer = self
            .customer_get(customer_id)
            .ok_or_else(DomainError::not_found)?;
        let invoices = self
            .invoices
            .lock()
            .unwrap()
            .get(&customer_id)
            .cloned()
            .unwrap_or_default();
        let payments = self
            .payments
            .lock()
            .unwrap()
            .get(&customer_id)
            .cloned()
            .unwrap_or_default();

        let opening = OpeningBalance::new(
            customer.opening_balance,
            customer.created_at.date_naive(),
        );
        reconstruct(opening, &invoices, &payments)
    }
}
