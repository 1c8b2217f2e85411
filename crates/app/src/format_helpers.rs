/// Display formatting for table cells.
///
/// Dates go through `shared_types::format_tanggal`; this module covers
/// money, percentages and optional text.

/// Format an amount as Rupiah with dot thousands separators, e.g. "Rp 1.500.000".
///
/// Fractions are rounded to whole rupiah. Negative amounts keep their sign
/// after the currency symbol.
pub fn format_rupiah(amount: f64) -> String {
    if !amount.is_finite() {
        return "Rp 0".to_string();
    }
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("Rp -{grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

/// Percentage with two decimals and a comma separator, e.g. "45,25%".
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%").replace('.', ",")
}

/// Text for an optional cell; blank values show a dash.
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
