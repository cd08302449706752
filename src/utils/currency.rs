/// Currency utility functions for invoice and commission amounts
///
/// All monetary values in the database are stored in cents (1 € = 100 cents)
/// to avoid floating-point precision issues. Amount strings coming from
/// clients are parsed digit-wise, never through a float.

/// Fixed commission rate: affiliates earn 20% of each invoice.
pub const COMMISSION_RATE_PERCENT: i64 = 20;

/// Parse an amount string ("1000", "1000.5", "1000.50") to cents.
/// Rejects non-positive amounts and more than 2 fractional digits.
pub fn parse_amount_to_cents(amount_str: &str) -> Result<i64, String> {
    let amount_str = amount_str.trim();

    if amount_str.is_empty() || amount_str.starts_with('-') || amount_str.starts_with('+') {
        return Err("Invalid amount format".to_string());
    }

    let (whole, frac) = match amount_str.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (amount_str, ""),
    };

    if frac.len() > 2 {
        return Err("Amount must have at most 2 decimal places".to_string());
    }

    if whole.is_empty()
        || !whole.chars().all(|c| c.is_ascii_digit())
        || !frac.chars().all(|c| c.is_ascii_digit())
    {
        return Err("Invalid amount format".to_string());
    }

    let whole: i64 = whole
        .parse()
        .map_err(|_| "Invalid amount format".to_string())?;

    let frac_cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().unwrap_or(0) * 10,
        _ => frac.parse::<i64>().unwrap_or(0),
    };

    let cents = whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(frac_cents))
        .ok_or_else(|| "Amount is too large".to_string())?;

    if cents <= 0 {
        return Err("Amount must be greater than zero".to_string());
    }

    Ok(cents)
}

/// Commission owed on an invoice amount: 20%, rounded half-up to the cent.
pub fn commission_on(amount_cents: i64) -> i64 {
    (amount_cents * COMMISSION_RATE_PERCENT + 50) / 100
}

/// Format cents as a Euro string with 2 decimal places
pub fn format_cents_as_euros(cents: i64) -> String {
    format!("{}.{:02} €", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_to_cents() {
        assert_eq!(parse_amount_to_cents("100.00"), Ok(10000));
        assert_eq!(parse_amount_to_cents("1000"), Ok(100000));
        assert_eq!(parse_amount_to_cents("0.50"), Ok(50));
        assert_eq!(parse_amount_to_cents("0.5"), Ok(50));
        assert_eq!(parse_amount_to_cents("123.45"), Ok(12345));
    }

    #[test]
    fn test_parse_amount_rejects_bad_input() {
        assert!(parse_amount_to_cents("").is_err());
        assert!(parse_amount_to_cents("abc").is_err());
        assert!(parse_amount_to_cents("-100").is_err());
        assert!(parse_amount_to_cents("0").is_err());
        assert!(parse_amount_to_cents("0.00").is_err());
        assert!(parse_amount_to_cents("10.123").is_err());
        assert!(parse_amount_to_cents("10,50").is_err());
        assert!(parse_amount_to_cents(".50").is_err());
    }

    #[test]
    fn test_commission_on() {
        // 1000.00 € invoice -> 200.00 € commission
        assert_eq!(commission_on(100000), 20000);
        assert_eq!(commission_on(10000), 2000);
        // rounding to the nearest cent, half-up
        assert_eq!(commission_on(1001), 200); // 200.2 cents
        assert_eq!(commission_on(1003), 201); // 200.6 cents
        assert_eq!(commission_on(1), 0);
        assert_eq!(commission_on(3), 1);
    }

    #[test]
    fn test_format_cents_as_euros() {
        assert_eq!(format_cents_as_euros(10000), "100.00 €");
        assert_eq!(format_cents_as_euros(50), "0.50 €");
        assert_eq!(format_cents_as_euros(12345), "123.45 €");
    }
}
