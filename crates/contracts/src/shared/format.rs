//! Number formatting shared by summary cards and table cells (en-US style).

use super::indicators::ValueFormat;

/// Разделитель тысяч: 1234567 -> "1,234,567"
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

fn currency_symbol(currency: &str) -> String {
    match currency {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        other => format!("{} ", other),
    }
}

/// Whole-unit currency amount, e.g. `$847,500`.
pub fn format_currency(value: f64, currency: &str) -> String {
    let rounded = value.round() as i64;
    let symbol = currency_symbol(currency);
    if rounded < 0 {
        format!("-{}{}", symbol, format_thousands(-rounded))
    } else {
        format!("{}{}", symbol, format_thousands(rounded))
    }
}

pub fn format_usd(value: f64) -> String {
    format_currency(value, "USD")
}

pub fn format_percent(value: f64, decimals: u8) -> String {
    format!("{:.*}%", decimals as usize, value)
}

pub fn format_value(value: f64, format: &ValueFormat) -> String {
    match format {
        ValueFormat::Money { currency } => format_currency(value, currency),
        ValueFormat::Number { decimals } => {
            if *decimals == 0 {
                format_thousands(value.round() as i64)
            } else {
                format!("{:.*}", *decimals as usize, value)
            }
        }
        ValueFormat::Percent { decimals } => format_percent(value, *decimals),
        ValueFormat::Integer => format_thousands(value.round() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separator() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-45000), "-45,000");
    }

    #[test]
    fn currency_rounds_to_whole_units() {
        assert_eq!(format_usd(847_500.0), "$847,500");
        assert_eq!(format_usd(1234.6), "$1,235");
        assert_eq!(format_usd(-20.0), "-$20");
        assert_eq!(format_currency(10.0, "CHF"), "CHF 10");
    }

    #[test]
    fn value_format_dispatch() {
        assert_eq!(format_value(42.0, &ValueFormat::Percent { decimals: 0 }), "42%");
        assert_eq!(format_value(3.14159, &ValueFormat::Number { decimals: 2 }), "3.14");
        assert_eq!(format_value(1500.0, &ValueFormat::Integer), "1,500");
    }
}
