//! `netbill-billing` — customer billing records.
//!
//! Plain, immutable snapshots of what the persistence layer holds: customers,
//! invoices raised, payments received. The statement engine consumes these
//! read-only; nothing in this crate fetches or mutates storage.

pub mod customer;
pub mod invoice;
pub mod payment;

pub use customer::{ContactInfo, Customer, CustomerStatus};
pub use invoice::Invoice;
pub use payment::{Payment, PaymentMethod};
