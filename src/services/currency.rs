use crate::constants::CURRENCY_PREFIX;

/// Render an amount in the fixed report pattern: `R$` prefix, no decimal
/// digits, dot thousands separators (1234567.0 -> "R$ 1.234.567").
/// Rounds to the nearest integer first.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.insert(0, '.');
        }
        grouped.insert(0, c);
    }

    let sign = if rounded < 0 { "-" } else { "" };
    format!("{} {}{}", CURRENCY_PREFIX, sign, grouped)
}
