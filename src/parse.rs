//! Magnitude extraction from human-formatted listing strings.
//!
//! The scraper stores prices and capacities exactly as they appeared on the
//! page ("$279.99", "18TB"). These helpers strip the formatting so the
//! table sorters and the statistics aggregator can work on numbers.
//! Pure functions of their input, no side effects.

/// Parse a currency-formatted price string ("$1,299.00") into its decimal
/// value. Strips everything that is not a digit or decimal point; returns
/// None when nothing parseable remains.
pub fn parse_price(s: &str) -> Option<f64> {
    let cleaned: String = s.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Sort key for price columns. Unparseable strings become NaN, which
/// `f64::total_cmp` orders after every real number, so bad rows collect at
/// the bottom instead of panicking or scattering.
pub fn price_sort_key(s: &str) -> f64 {
    parse_price(s).unwrap_or(f64::NAN)
}

/// Parse a capacity string into a GB-equivalent magnitude for comparison.
///
/// "18TB" -> 18000, "500GB" -> 500. Only the "TB" token is normalized;
/// "MB" and "PB" strings fall through as raw magnitudes, matching the
/// original dashboard's narrow behavior. Callers must treat such values
/// as unnormalized if they ever appear.
pub fn parse_capacity(s: &str) -> f64 {
    let cleaned: String = s.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    let magnitude = cleaned.parse::<f64>().unwrap_or(f64::NAN);
    if s.contains("TB") {
        magnitude * 1000.0
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_strips_currency_symbol() {
        assert_eq!(parse_price("$279.99"), Some(279.99));
    }

    #[test]
    fn price_strips_thousands_separator() {
        assert_eq!(parse_price("$1,299.00"), Some(1299.0));
    }

    #[test]
    fn price_empty_string_is_none() {
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn price_no_digits_is_none() {
        assert_eq!(parse_price("n/a"), None);
        assert_eq!(parse_price("$"), None);
    }

    #[test]
    fn price_never_negative() {
        for s in ["$0.01", "-$5.00", "$1,000", "99 USD"] {
            let parsed = parse_price(s).unwrap();
            assert!(parsed >= 0.0, "{s} parsed to {parsed}");
        }
    }

    #[test]
    fn price_sort_key_nan_orders_last() {
        let mut keys = [price_sort_key("n/a"), price_sort_key("$5"), price_sort_key("$10")];
        keys.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(keys[0], 5.0);
        assert_eq!(keys[1], 10.0);
        assert!(keys[2].is_nan());
    }

    #[test]
    fn capacity_tb_normalized_to_gb_scale() {
        assert_eq!(parse_capacity("18TB"), 18000.0);
        assert_eq!(parse_capacity("2TB"), 2000.0);
    }

    #[test]
    fn capacity_gb_left_raw() {
        assert_eq!(parse_capacity("500GB"), 500.0);
    }

    #[test]
    fn capacity_fractional() {
        assert_eq!(parse_capacity("1.5TB"), 1500.0);
    }

    #[test]
    fn capacity_orders_across_units() {
        assert!(parse_capacity("500GB") < parse_capacity("1TB"));
        assert!(parse_capacity("4TB") < parse_capacity("18TB"));
    }
}
