/// Presentation string shown on a successful prediction.
pub fn display_price(price: f64) -> String {
    format!("Estimated Sale Price: ${}", currency(price))
}

/// Formats a value with thousands separators and exactly two decimals.
/// Rounding to cents happens here only; the raw value is never rounded
/// upstream.
pub fn currency(value: f64) -> String {
    let cents = (value * 100.0).round() as i128;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}.{frac:02}")
}
