use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use netbill_billing::{Invoice, Payment};
use netbill_core::{DomainError, DomainResult, Money};

/// Kind of a statement row.
///
/// The derived `Ord` is the tie-break priority within a date: opening balance
/// first, then invoices, then payments.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    OpeningBalance,
    Invoice,
    Payment,
}

/// One row of a customer account statement.
///
/// Exactly one of `debit`/`credit` is nonzero, except the opening row of a
/// zero-activity statement where both are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub kind: EntryKind,
    pub description: String,
    pub debit: Money,
    pub credit: Money,
    /// Running balance after this row; positive means the customer owes money.
    pub balance: Money,
}

/// Carried-forward balance from before the records being reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningBalance {
    pub amount: Money,
    /// Date the carried-forward balance was struck; shown on the opening row.
    pub as_of: NaiveDate,
}

impl OpeningBalance {
    pub fn new(amount: Money, as_of: NaiveDate) -> Self {
        Self { amount, as_of }
    }

    /// No carried-forward balance.
    pub fn none(as_of: NaiveDate) -> Self {
        Self {
            amount: Money::ZERO,
            as_of,
        }
    }
}

/// A reconstructed statement: ordered rows plus the final outstanding balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerStatement {
    pub entries: Vec<LedgerEntry>,
    pub balance: Money,
}

/// Internal merge record: one dated billing event plus enough key material
/// for a deterministic sort.
struct DatedEvent {
    date: NaiveDate,
    kind: EntryKind,
    occurred_at: DateTime<Utc>,
    input_index: usize,
    description: String,
    debit: Money,
    credit: Money,
}

/// Rebuild a customer's running ledger from unordered invoices and payments.
///
/// Events are sorted by `(date, kind, timestamp, input index)` so the same
/// logical data always yields the same statement, no matter how the caller's
/// query happened to order the rows. The fold seeds its running balance from
/// the opening balance; every invoice debits, every payment credits.
///
/// The opening row is emitted only when the opening balance is nonzero or
/// there is no other activity — a dormant customer still gets a one-row
/// statement rather than an empty one.
///
/// Fails fast with [`DomainError::InvalidAmount`] on any negative invoice or
/// payment amount; no partial statement is produced.
pub fn reconstruct(
    opening: OpeningBalance,
    invoices: &[Invoice],
    payments: &[Payment],
) -> DomainResult<CustomerStatement> {
    for invoice in invoices {
        if invoice.total_amount.is_negative() {
            return Err(DomainError::invalid_amount(format!(
                "invoice {} has negative amount {}",
                invoice.id, invoice.total_amount
            )));
        }
    }
    for payment in payments {
        if payment.amount.is_negative() {
            return Err(DomainError::invalid_amount(format!(
                "payment {} has negative amount {}",
                payment.id, payment.amount
            )));
        }
    }

    let mut events: Vec<DatedEvent> = Vec::with_capacity(invoices.len() + payments.len());
    for (input_index, invoice) in invoices.iter().enumerate() {
        events.push(DatedEvent {
            date: invoice.issued_at.date_naive(),
            kind: EntryKind::Invoice,
            occurred_at: invoice.issued_at,
            input_index,
            description: invoice.description.clone(),
            debit: invoice.total_amount,
            credit: Money::ZERO,
        });
    }
    for (input_index, payment) in payments.iter().enumerate() {
        events.push(DatedEvent {
            date: payment.received_at.date_naive(),
            kind: EntryKind::Payment,
            occurred_at: payment.received_at,
            input_index,
            description: format!("Payment received - {}", payment.method),
            debit: Money::ZERO,
            credit: payment.amount,
        });
    }

    // Deterministic order: date, then kind priority, then timestamp, then
    // input position as the last-resort tie-break.
    events.sort_by_key(|e| (e.date, e.kind, e.occurred_at, e.input_index));

    let mut entries: Vec<LedgerEntry> = Vec::with_capacity(events.len() + 1);

    if !opening.amount.is_zero() || events.is_empty() {
        let (debit, credit) = if opening.amount.is_negative() {
            (Money::ZERO, opening.amount.abs())
        } else {
            (opening.amount, Money::ZERO)
        };
        entries.push(LedgerEntry {
            date: opening.as_of,
            kind: EntryKind::OpeningBalance,
            description: "Opening Balance".to_string(),
            debit,
            credit,
            balance: opening.amount,
        });
    }

    let mut running = opening.amount;
    for event in events {
        running = running
            .checked_add(event.debit)
            .and_then(|b| b.checked_sub(event.credit))
            .ok_or_else(|| DomainError::validation("running balance overflow"))?;
        entries.push(LedgerEntry {
            date: event.date,
            kind: event.kind,
            description: event.description,
            debit: event.debit,
            credit: event.credit,
            balance: running,
        });
    }

    let balance = entries.last().map(|e| e.balance).unwrap_or(opening.amount);
    Ok(CustomerStatement { entries, balance })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use netbill_billing::PaymentMethod;
    use netbill_core::CustomerId;
    use proptest::prelude::*;

    fn day(offset: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap() + Duration::days(offset)
    }

    fn opening(rupees: i64) -> OpeningBalance {
        OpeningBalance::new(Money::from_rupees(rupees), day(-1).date_naive())
    }

    fn invoice(customer: CustomerId, rupees: i64, at: DateTime<Utc>) -> Invoice {
        Invoice::new(customer, Money::from_rupees(rupees), at, at + Duration::days(15), "Monthly plan")
            .unwrap()
    }

    fn payment(customer: CustomerId, via: &Invoice, rupees: i64, at: DateTime<Utc>) -> Payment {
        Payment::new(
            customer,
            via.id,
            Money::from_rupees(rupees),
            at,
            PaymentMethod::Cash,
        )
        .unwrap()
    }

    #[test]
    fn statement_is_ordered_with_running_balance() {
        let customer = CustomerId::new();
        let inv_feb = invoice(customer, 1200, day(31));
        let inv_jan = invoice(customer, 1200, day(0));
        let pay_jan = payment(customer, &inv_jan, 1200, day(10));

        // Inputs deliberately out of order.
        let stmt = reconstruct(
            opening(500),
            &[inv_feb.clone(), inv_jan.clone()],
            &[pay_jan.clone()],
        )
        .unwrap();

        let kinds: Vec<EntryKind> = stmt.entries.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntryKind::OpeningBalance,
                EntryKind::Invoice,
                EntryKind::Payment,
                EntryKind::Invoice,
            ]
        );
        let balances: Vec<i64> = stmt.entries.iter().map(|e| e.balance.whole_rupees()).collect();
        assert_eq!(balances, vec![500, 1700, 500, 1700]);
        assert_eq!(stmt.balance, Money::from_rupees(1700));
    }

    #[test]
    fn zero_activity_customer_gets_single_opening_row() {
        let stmt = reconstruct(opening(0), &[], &[]).unwrap();
        assert_eq!(stmt.entries.len(), 1);
        assert_eq!(stmt.entries[0].kind, EntryKind::OpeningBalance);
        assert!(stmt.entries[0].debit.is_zero());
        assert!(stmt.entries[0].credit.is_zero());
        assert_eq!(stmt.balance, Money::ZERO);
    }

    #[test]
    fn zero_opening_with_activity_emits_no_opening_row() {
        let customer = CustomerId::new();
        let inv = invoice(customer, 800, day(0));
        let stmt = reconstruct(opening(0), &[inv], &[]).unwrap();
        assert_eq!(stmt.entries.len(), 1);
        assert_eq!(stmt.entries[0].kind, EntryKind::Invoice);
        assert_eq!(stmt.balance, Money::from_rupees(800));
    }

    #[test]
    fn negative_opening_balance_shows_as_credit() {
        let stmt = reconstruct(opening(-250), &[], &[]).unwrap();
        assert_eq!(stmt.entries[0].credit, Money::from_rupees(250));
        assert!(stmt.entries[0].debit.is_zero());
        assert_eq!(stmt.balance, Money::from_rupees(-250));
    }

    #[test]
    fn same_day_invoice_sorts_before_payment() {
        let customer = CustomerId::new();
        // Payment clocked earlier in the day than the invoice; kind priority
        // still puts the invoice row first.
        let inv = invoice(customer, 1000, day(0) + Duration::hours(5));
        let pay = payment(customer, &inv, 400, day(0));
        let stmt = reconstruct(opening(0), &[inv], &[pay]).unwrap();
        assert_eq!(stmt.entries[0].kind, EntryKind::Invoice);
        assert_eq!(stmt.entries[1].kind, EntryKind::Payment);
        assert_eq!(stmt.balance, Money::from_rupees(600));
    }

    #[test]
    fn negative_amount_fails_fast() {
        let customer = CustomerId::new();
        let mut inv = invoice(customer, 100, day(0));
        // Bypass the constructor to simulate a corrupt upstream row.
        inv.total_amount = Money::from_rupees(-100);
        let err = reconstruct(opening(0), &[inv], &[]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidAmount(_)));
    }

    fn arb_events() -> impl Strategy<Value = (i64, Vec<(i64, u16)>, Vec<(i64, u16)>)> {
        (
            -100_000i64..100_000,
            prop::collection::vec((0i64..500_000, 0u16..730), 0..12),
            prop::collection::vec((0i64..500_000, 0u16..730), 0..12),
        )
    }

    fn build(
        opening_rupees: i64,
        invoice_specs: &[(i64, u16)],
        payment_specs: &[(i64, u16)],
    ) -> (OpeningBalance, Vec<Invoice>, Vec<Payment>) {
        let customer = CustomerId::new();
        // Unique timestamps per collection: exact-timestamp ties fall back to
        // input order, which the order-independence property must not rely on.
        let invoices: Vec<Invoice> = invoice_specs
            .iter()
            .enumerate()
            .map(|(i, &(rupees, d))| {
                invoice(customer, rupees, day(d as i64) + Duration::seconds(i as i64))
            })
            .collect();
        let anchor = invoices
            .first()
            .cloned()
            .unwrap_or_else(|| invoice(customer, 0, day(0)));
        let payments: Vec<Payment> = payment_specs
            .iter()
            .enumerate()
            .map(|(i, &(rupees, d))| {
                payment(customer, &anchor, rupees, day(d as i64) + Duration::seconds(i as i64))
            })
            .collect();
        (opening(opening_rupees), invoices, payments)
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the final balance equals opening + sum of invoices minus
        /// sum of payments, computed independently of the fold.
        #[test]
        fn balance_identity((opening_rupees, invoice_specs, payment_specs) in arb_events()) {
            let (op, invoices, payments) = build(opening_rupees, &invoice_specs, &payment_specs);
            let stmt = reconstruct(op, &invoices, &payments).unwrap();

            let debits: i64 = invoices.iter().map(|i| i.total_amount.paisa()).sum();
            let credits: i64 = payments.iter().map(|p| p.amount.paisa()).sum();
            prop_assert_eq!(stmt.balance.paisa(), op.amount.paisa() + debits - credits);
        }

        /// Property: every adjacent pair of rows obeys
        /// `balance[i] == balance[i-1] + debit[i] - credit[i]`.
        #[test]
        fn running_balance_recurrence((opening_rupees, invoice_specs, payment_specs) in arb_events()) {
            let (op, invoices, payments) = build(opening_rupees, &invoice_specs, &payment_specs);
            let stmt = reconstruct(op, &invoices, &payments).unwrap();

            for pair in stmt.entries.windows(2) {
                let expected = pair[0].balance.paisa() + pair[1].debit.paisa() - pair[1].credit.paisa();
                prop_assert_eq!(pair[1].balance.paisa(), expected);
            }
            if let Some(last) = stmt.entries.last() {
                prop_assert_eq!(last.balance, stmt.balance);
            }
        }

        /// Property: input order does not matter — reversing both collections
        /// yields an identical statement.
        #[test]
        fn input_order_independence((opening_rupees, invoice_specs, payment_specs) in arb_events()) {
            let (op, invoices, payments) = build(opening_rupees, &invoice_specs, &payment_specs);
            let forward = reconstruct(op, &invoices, &payments).unwrap();

            let mut invoices_rev = invoices.clone();
            invoices_rev.reverse();
            let mut payments_rev = payments.clone();
            payments_rev.reverse();
            let backward = reconstruct(op, &invoices_rev, &payments_rev).unwrap();

            prop_assert_eq!(forward.balance, backward.balance);
            prop_assert_eq!(
                forward.entries.iter().map(|e| (e.date, e.kind, e.balance)).collect::<Vec<_>>(),
                backward.entries.iter().map(|e| (e.date, e.kind, e.balance)).collect::<Vec<_>>()
            );
        }
    }
}
