//! Fixed-point money.
//!
//! Amounts are carried as signed 64-bit **paisa** (minor units; 100 paisa =
//! 1 rupee). Running-balance folds over binary floats accumulate error, so the
//! domain never touches `f64` — callers convert at the edge if they must.

use serde::{Deserialize, Serialize};

/// A currency amount in paisa. Compared and hashed by value.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_paisa(paisa: i64) -> Self {
        Self(paisa)
    }

    /// Whole-rupee amount, paisa part zero.
    pub const fn from_rupees(rupees: i64) -> Self {
        Self(rupees * 100)
    }

    pub const fn paisa(&self) -> i64 {
        self.0
    }

    /// Whole-rupee magnitude with the paisa remainder dropped (truncation,
    /// not rounding).
    pub const fn whole_rupees(&self) -> i64 {
        self.0 / 100
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn abs(&self) -> Money {
        Money(self.0.abs())
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_rupees_truncates_paisa() {
        assert_eq!(Money::from_paisa(199_999).whole_rupees(), 1999);
        assert_eq!(Money::from_paisa(199_900).whole_rupees(), 1999);
        assert_eq!(Money::from_paisa(99).whole_rupees(), 0);
    }

    #[test]
    fn display_is_rupees_dot_paisa() {
        assert_eq!(Money::from_paisa(123_456).to_string(), "1234.56");
        assert_eq!(Money::from_paisa(-50).to_string(), "-0.50");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        assert_eq!(Money::from_paisa(i64::MAX).checked_add(Money::from_paisa(1)), None);
        assert_eq!(
            Money::from_rupees(1).checked_sub(Money::from_rupees(3)),
            Some(Money::from_rupees(-2))
        );
    }
}
