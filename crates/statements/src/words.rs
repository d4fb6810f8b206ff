use netbill_core::{DomainError, DomainResult, Money};

const LAKH: u64 = 100_000;
const CRORE: u64 = 10_000_000;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Render an amount in words for a printed receipt, using the South Asian
/// lakh/crore grouping.
///
/// The grouping is NOT the international base-1000 one: only the bottom three
/// digits form a group; every group above them is two digits wide (Thousand,
/// Lakh = 10^5, Crore = 10^7). The paisa remainder is dropped before
/// conversion (floor, not round), and the whole phrase is upper-cased with a
/// trailing "RUPEES ONLY".
///
/// Negative amounts are a caller contract violation and are reported as
/// [`DomainError::InvalidAmount`].
pub fn amount_in_words(amount: Money) -> DomainResult<String> {
    if amount.is_negative() {
        return Err(DomainError::invalid_amount(format!(
            "cannot render negative amount {amount} in words"
        )));
    }

    let rupees = amount.whole_rupees() as u64;
    if rupees == 0 {
        // Literal branch: the grouping loop below would emit nothing for zero.
        return Ok("ZERO RUPEES ONLY".to_string());
    }

    Ok(format!("{} RUPEES ONLY", number_words(rupees).to_uppercase()))
}

/// Words for a positive integer under the lakh/crore scheme.
///
/// Amounts of 100 crore and above recurse on the crore count, so e.g.
/// 2,50,00,00,000 reads "Two Hundred Fifty Crore".
fn number_words(n: u64) -> String {
    if n >= CRORE {
        labeled_group(number_words(n / CRORE), "Crore", n % CRORE)
    } else if n >= LAKH {
        labeled_group(two_digit_words(n / LAKH), "Lakh", n % LAKH)
    } else if n >= 1_000 {
        labeled_group(two_digit_words(n / 1_000), "Thousand", n % 1_000)
    } else {
        hundreds_words(n)
    }
}

fn labeled_group(group: String, label: &str, remainder: u64) -> String {
    if remainder == 0 {
        format!("{group} {label}")
    } else {
        format!("{group} {label} {}", number_words(remainder))
    }
}

/// Words for the trailing, unlabeled group (1..=999).
fn hundreds_words(n: u64) -> String {
    let hundreds = (n / 100) as usize;
    let rest = n % 100;
    match (hundreds, rest) {
        (0, r) => two_digit_words(r),
        (h, 0) => format!("{} Hundred", ONES[h]),
        (h, r) => format!("{} Hundred {}", ONES[h], two_digit_words(r)),
    }
}

/// Words for a 1..=99 value. Zero is never emitted inside a group.
fn two_digit_words(n: u64) -> String {
    debug_assert!((1..=99).contains(&n));
    if n < 20 {
        ONES[n as usize].to_string()
    } else if n % 10 == 0 {
        TENS[(n / 10) as usize].to_string()
    } else {
        format!("{} {}", TENS[(n / 10) as usize], ONES[(n % 10) as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(rupees: i64) -> String {
        amount_in_words(Money::from_rupees(rupees)).unwrap()
    }

    #[test]
    fn zero_is_the_fixed_phrase() {
        assert_eq!(words(0), "ZERO RUPEES ONLY");
    }

    #[test]
    fn golden_values() {
        assert_eq!(words(7), "SEVEN RUPEES ONLY");
        assert_eq!(words(45), "FORTY FIVE RUPEES ONLY");
        assert_eq!(words(800), "EIGHT HUNDRED RUPEES ONLY");
        assert_eq!(words(1_200), "ONE THOUSAND TWO HUNDRED RUPEES ONLY");
        assert_eq!(words(45_000), "FORTY FIVE THOUSAND RUPEES ONLY");
        assert_eq!(words(100_000), "ONE LAKH RUPEES ONLY");
        assert_eq!(words(250_000), "TWO LAKH FIFTY THOUSAND RUPEES ONLY");
        assert_eq!(words(10_000_000), "ONE CRORE RUPEES ONLY");
    }

    #[test]
    fn grouping_is_base_100_above_the_first_three_digits() {
        // A naive group-by-3 implementation goes wrong right here.
        assert!(!words(99_999).contains("LAKH"));
        assert!(words(100_000).contains("LAKH"));
        assert!(!words(9_999_999).contains("CRORE"));
        assert!(words(10_000_000).contains("CRORE"));
        assert_eq!(
            words(12_34_56_789),
            "TWELVE CRORE THIRTY FOUR LAKH FIFTY SIX THOUSAND SEVEN HUNDRED EIGHTY NINE RUPEES ONLY"
        );
    }

    #[test]
    fn zero_valued_groups_are_skipped() {
        assert_eq!(words(10_00_045), "TEN LAKH FORTY FIVE RUPEES ONLY");
        assert_eq!(words(1_00_00_001), "ONE CRORE ONE RUPEES ONLY");
    }

    #[test]
    fn amounts_beyond_99_crore_recurse_on_the_crore_count() {
        assert_eq!(words(2_50_00_00_000), "TWO HUNDRED FIFTY CRORE RUPEES ONLY");
    }

    #[test]
    fn paisa_remainder_is_truncated_not_rounded() {
        // 1999.99 rupees is 199999 paisa.
        assert_eq!(
            amount_in_words(Money::from_paisa(199_999)).unwrap(),
            amount_in_words(Money::from_rupees(1_999)).unwrap()
        );
    }

    #[test]
    fn negative_amount_is_rejected() {
        let err = amount_in_words(Money::from_rupees(-1)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidAmount(_)));
    }
}
