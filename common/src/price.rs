//! Czech-crown price strings: `"6 490 000 Kč"` ⇄ `6_490_000`.

use thiserror::Error;

pub const CURRENCY_SUFFIX: &str = "Kč";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("price {0:?} does not end with the Kč currency label")]
    MissingCurrency(String),
    #[error("price {0:?} has no digits")]
    Empty(String),
    #[error("price {0:?} contains non-digit characters")]
    InvalidDigits(String),
    #[error("price {0:?} is out of range")]
    Overflow(String),
}

/// Parses a display price with space-separated thousands and a trailing `Kč`.
pub fn parse_czk(raw: &str) -> Result<u64, PriceError> {
    let amount = raw
        .trim_end()
        .strip_suffix(CURRENCY_SUFFIX)
        .ok_or_else(|| PriceError::MissingCurrency(raw.to_string()))?;
    let digits: String = amount.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() {
        return Err(PriceError::Empty(raw.to_string()));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PriceError::InvalidDigits(raw.to_string()));
    }
    digits
        .parse::<u64>()
        .map_err(|_| PriceError::Overflow(raw.to_string()))
}

/// Formats whole crowns the way the catalog writes them.
pub fn format_czk(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    format!("{grouped} {CURRENCY_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_prices() {
        assert_eq!(parse_czk("6 490 000 Kč"), Ok(6_490_000));
        assert_eq!(parse_czk("950 000 Kč"), Ok(950_000));
        assert_eq!(parse_czk("15 Kč"), Ok(15));
    }

    #[test]
    fn tolerates_no_break_spaces() {
        assert_eq!(parse_czk("3\u{a0}250\u{a0}000\u{a0}Kč"), Ok(3_250_000));
    }

    #[test]
    fn rejects_other_conventions() {
        assert!(matches!(parse_czk("6,490,000 Kč"), Err(PriceError::InvalidDigits(_))));
        assert!(matches!(parse_czk("6 490 000"), Err(PriceError::MissingCurrency(_))));
        assert!(matches!(parse_czk("€ 250 000"), Err(PriceError::MissingCurrency(_))));
        assert!(matches!(parse_czk(" Kč"), Err(PriceError::Empty(_))));
        assert!(matches!(parse_czk("99999999999999999999999 Kč"), Err(PriceError::Overflow(_))));
    }

    #[test]
    fn formats_with_space_groups() {
        assert_eq!(format_czk(100_000), "100 000 Kč");
        assert_eq!(format_czk(15_000_000), "15 000 000 Kč");
        assert_eq!(format_czk(999), "999 Kč");
        assert_eq!(format_czk(1_000), "1 000 Kč");
    }
}
