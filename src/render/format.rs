use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Narrow no-break space, the fr-FR digit group separator.
const GROUP_SEPARATOR: char = '\u{202f}';

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// `1234.5` -> `1 234,50` (fr-FR, two decimals). Missing prices render as `NaN`.
pub fn format_price(price: Option<f64>) -> String {
    let Some(price) = price.filter(|p| p.is_finite()) else {
        return "NaN".to_string();
    };

    let fixed = format!("{:.2}", price.abs());
    let (integer, decimals) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }

    let sign = if price < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{},{}", sign, grouped, decimals)
}

/// Parses the API timestamp. Offsets are converted to local time.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `15 janvier 2024 à 10:30`, or `Invalid Date` when unparsable.
pub fn format_date(raw: Option<&str>) -> String {
    match raw.and_then(parse_timestamp) {
        Some(dt) => {
            use chrono::Datelike;
            let month = MONTHS_FR[dt.month0() as usize];
            format!(
                "{} {} {} à {}",
                dt.day(),
                month,
                dt.year(),
                dt.format("%H:%M")
            )
        }
        None => "Invalid Date".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(0.0)), "0,00");
        assert_eq!(format_price(Some(999.5)), "999,50");
        assert_eq!(format_price(Some(1500.0)), "1\u{202f}500,00");
        assert_eq!(format_price(Some(1234567.891)), "1\u{202f}234\u{202f}567,89");
        assert_eq!(format_price(Some(-2500.0)), "-2\u{202f}500,00");
        assert_eq!(format_price(None), "NaN");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date(Some("2024-01-15 10:30:00")),
            "15 janvier 2024 à 10:30"
        );
        assert_eq!(
            format_date(Some("2024-08-05T09:05:12.000")),
            "5 août 2024 à 09:05"
        );
        assert_eq!(format_date(Some("2023-12-01")), "1 décembre 2023 à 00:00");
        assert_eq!(format_date(Some("yesterday")), "Invalid Date");
        assert_eq!(format_date(None), "Invalid Date");
    }
}
