//! Locale formatting policy for amounts and dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Spreadsheet number format applied to currency cells on export.
pub const CURRENCY_CELL_FORMAT: &str = r##""$"#,##0.00"##;

/// Locale-aware formatting preferences. The default follows Argentine
/// Spanish conventions: `1.234,56` grouping and `dd/mm/yyyy` dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    /// `chrono` format pattern for rendered dates.
    pub date_pattern: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "es-AR".into(),
            decimal_separator: ',',
            grouping_separator: '.',
            date_pattern: "%d/%m/%Y".into(),
        }
    }
}

/// Renders a date with the locale's pattern.
pub fn format_date(locale: &LocaleConfig, date: NaiveDate) -> String {
    date.format(&locale.date_pattern).to_string()
}

/// Renders a number with the locale's separators at the given precision.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let raw = format!("{:.*}", precision as usize, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::with_capacity(raw.len() + int_part.len() / 3);
    for (index, digit) in int_part.chars().enumerate() {
        if index != 0 && (int_part.len() - index) % 3 == 0 {
            grouped.push(locale.grouping_separator);
        }
        grouped.push(digit);
    }

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

/// Renders an amount for display, e.g. `$1.234,56`.
pub fn format_amount(locale: &LocaleConfig, amount: f64) -> String {
    format!("${}", format_number(locale, amount, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_and_swaps_separators() {
        let locale = LocaleConfig::default();
        assert_eq!(format_number(&locale, 1234567.5, 2), "1.234.567,50");
        assert_eq!(format_number(&locale, 999.0, 2), "999,00");
        assert_eq!(format_number(&locale, -1234.56, 2), "-1.234,56");
    }

    #[test]
    fn amount_carries_symbol() {
        let locale = LocaleConfig::default();
        assert_eq!(format_amount(&locale, 350.0), "$350,00");
    }

    #[test]
    fn date_renders_day_first() {
        let locale = LocaleConfig::default();
        let date = NaiveDate::from_ymd_opt(2025, 9, 9).unwrap();
        assert_eq!(format_date(&locale, date), "09/09/2025");
    }
}
