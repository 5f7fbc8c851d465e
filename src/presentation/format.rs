//! Display formatting for slide figures (zh-CN conventions).

/// Group the integer part in thousands, keeping at most three decimals.
///
/// `1234567.891` becomes `1,234,567.891`, `1000.5` becomes `1,000.5`.
pub fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return plain(value);
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let digits = int_part.as_bytes();
    let mut out = String::with_capacity(fixed.len() + digits.len() / 3 + 1);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*d as char);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Grouped and rounded to a whole number: `1500000.5` becomes `1,500,001`.
pub fn grouped_integer(value: f64) -> String {
    grouped(value.round())
}

/// Shortest plain rendering of a number: `12` for 12.0, `12.5` for 12.5.
pub fn plain(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }
    format!("{value}")
}

/// Year-over-year growth with an explicit sign: `+23.4%`, `-5%`.
pub fn growth_percent(value: f64) -> String {
    if value < 0.0 {
        format!("{}%", plain(value))
    } else {
        format!("+{}%", plain(value))
    }
}

/// Whole ten-thousands, truncated: `1234567` becomes `123万+`.
pub fn ten_thousands(value: f64) -> String {
    let units = if value.is_finite() { (value / 10_000.0).trunc() } else { 0.0 };
    format!("{}万+", plain(units + 0.0))
}
