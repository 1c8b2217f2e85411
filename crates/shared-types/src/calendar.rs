use chrono::{Datelike, NaiveDate};

/// Month labels indexed by the `bulan` filter value; index 0 is the yearly summary.
pub const MONTH_NAMES: [&str; 13] = [
    "Summary",
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

pub fn month_name(month: u32) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTH_NAMES[month as usize]),
        _ => None,
    }
}

/// Year filter options, newest first, from `current_year` down to `floor`.
pub fn year_options(current_year: i32, floor: i32) -> Vec<i32> {
    (floor..=current_year).rev().collect()
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// 1-12.
pub fn current_month() -> u32 {
    chrono::Local::now().month()
}

/// "2024-03-15" (optionally followed by a time) as "15 Maret 2024".
///
/// Values that are not ISO dates are returned as-is; an empty value renders
/// as "-".
pub fn format_tanggal(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "-".to_string();
    }
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => format!(
            "{} {} {}",
            date.day(),
            MONTH_NAMES[date.month() as usize],
            date.year()
        ),
        Err(_) => trimmed.to_string(),
    }
}

pub fn format_tanggal_opt(value: Option<&str>) -> String {
    value.map(format_tanggal).unwrap_or_else(|| "-".to_string())
}
