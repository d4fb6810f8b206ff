//! `netbill-statements` — the financial statement engine.
//!
//! Two independent, stateless pieces:
//! - [`ledger::reconstruct`] turns an unordered pile of invoices and payments
//!   into a chronologically ordered statement with a running balance.
//! - [`words::amount_in_words`] renders an amount in words using the South
//!   Asian lakh/crore grouping, for printed receipts.
//!
//! Both are pure functions; neither performs I/O or reaches into storage.

pub mod ledger;
pub mod words;

pub use ledger::{CustomerStatement, EntryKind, LedgerEntry, OpeningBalance, reconstruct};
pub use words::amount_in_words;
