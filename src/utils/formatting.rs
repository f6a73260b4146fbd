//! Parsing and display helpers for amounts and prices
use regex::Regex;
use std::sync::LazyLock;
use thousands::Separable;

// Leading numeric literal; anything after it is ignored
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").expect("valid leading number pattern")
});

static NON_AMOUNT_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.]").expect("valid amount filter pattern"));

/// Parse free-text numeric input. Grouping commas are ignored and anything
/// that does not start with a number parses to zero.
pub fn parse_number(input: &str) -> f64 {
    let clean = input.replace(',', "");
    LEADING_NUMBER
        .find(clean.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| !n.is_nan())
        .unwrap_or(0.0)
}

/// Strip everything but digits and the first decimal point from typed input
pub fn sanitize_amount_input(input: &str) -> String {
    let digits = NON_AMOUNT_CHARS.replace_all(input, "");
    let mut seen_point = false;
    digits
        .chars()
        .filter(|c| {
            if *c != '.' {
                return true;
            }
            if seen_point {
                false
            } else {
                seen_point = true;
                true
            }
        })
        .collect()
}

/// Two decimals with comma grouping, e.g. `1234.5` -> `"1,234.50"`
pub fn format_number(value: f64) -> String {
    round_half_away(value, 2).separate_with_commas()
}

/// Round the shortest decimal form of `value` to `places`, ties away from zero.
/// `0.125` becomes `0.13` and `1.005` becomes `1.01`.
fn round_half_away(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return format!("{:.*}", places, value);
    }

    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let frac_digits = frac_part.bytes().chain(std::iter::repeat(b'0')).take(places);
    let mut digits: Vec<u8> = int_part.bytes().chain(frac_digits).map(|b| b - b'0').collect();

    if frac_part.as_bytes().get(places).is_some_and(|d| *d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let to_char = |d: &u8| char::from(b'0' + d);
    let split = digits.len() - places;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 && digits.iter().any(|d| *d != 0) {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(to_char));
    if places > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(to_char));
    }
    out
}

/// Integer display, rounding half away from zero
pub fn format_whole(value: f64) -> String {
    format!("{:.0}", value.round())
}

/// Price shown next to a token symbol; unknown prices render as `--`
pub fn format_price_label(price: f64) -> String {
    if price == 0.0 || price.is_nan() {
        "--".to_string()
    } else {
        format!("${:.2}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1,234.56"), 1234.56);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("12abc"), 12.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("  7"), 7.0);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("1\u{0663}"), 1.0);
        assert_eq!(parse_number("\u{0663}"), 0.0);
    }

    #[test]
    fn test_sanitize_amount_input() {
        assert_eq!(sanitize_amount_input("1,234.5x"), "1234.5");
        assert_eq!(sanitize_amount_input("1.2.3"), "1.23");
        assert_eq!(sanitize_amount_input("-42"), "42");
        assert_eq!(sanitize_amount_input("abc"), "");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234.5), "1,234.50");
        assert_eq!(format_number(5.0), "5.00");
        assert_eq!(format_number(1_000_000.0), "1,000,000.00");
        assert_eq!(format_number(0.004), "0.00");
        assert_eq!(format_number(-1234.5), "-1,234.50");
    }

    #[test]
    fn test_format_number_rounds_ties_up() {
        assert_eq!(format_number(0.125), "0.13");
        assert_eq!(format_number(2.675), "2.68");
        assert_eq!(format_number(1.005), "1.01");
        assert_eq!(format_number(9.995), "10.00");
        assert_eq!(format_number(999.999), "1,000.00");
        assert_eq!(format_number(0.124), "0.12");
    }

    #[test]
    fn test_format_whole() {
        assert_eq!(format_whole(5.0), "5");
        assert_eq!(format_whole(2.5), "3");
        assert_eq!(format_whole(1234.4), "1234");
    }

    #[test]
    fn test_format_price_label() {
        assert_eq!(format_price_label(0.0), "--");
        assert_eq!(format_price_label(9.1), "$9.10");
    }
}
