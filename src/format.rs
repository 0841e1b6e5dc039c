use chrono::NaiveDate;

use crate::config::CURRENCY_SYMBOL;

fn format_with_commas(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-unit pula amount, e.g. `P1,994,000` or `-P1,000,000`.
pub fn format_currency(amount: f64) -> String {
    let rounded = if amount.is_finite() {
        amount.round() as i64
    } else {
        0
    };
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}{}{}", sign, CURRENCY_SYMBOL, format_with_commas(rounded))
}

pub fn format_percentage(percentage: f64) -> String {
    format!("{:.1}%", percentage)
}

/// `2025-07-01` becomes `1 Jul 2025`. Timestamps are cut to their date part;
/// anything unparseable is shown as sent.
pub fn format_date(raw: &str) -> String {
    let date_part = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%-d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands_without_fraction() {
        assert_eq!(format_currency(0.0), "P0");
        assert_eq!(format_currency(950.0), "P950");
        assert_eq!(format_currency(1_000.0), "P1,000");
        assert_eq!(format_currency(1_994_000.0), "P1,994,000");
        assert_eq!(format_currency(123_456.6), "P123,457");
    }

    #[test]
    fn negative_remaining_keeps_its_sign() {
        assert_eq!(format_currency(-1_000_000.0), "-P1,000,000");
        assert_eq!(format_currency(-0.2), "P0");
    }

    #[test]
    fn percentage_has_one_decimal() {
        assert_eq!(format_percentage(0.3), "0.3%");
        assert_eq!(format_percentage(100.0), "100.0%");
        assert_eq!(format_percentage(33.333), "33.3%");
    }

    #[test]
    fn dates_render_day_month_year() {
        assert_eq!(format_date("2025-07-01"), "1 Jul 2025");
        assert_eq!(format_date("2025-12-24T10:15:00"), "24 Dec 2025");
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }
}
