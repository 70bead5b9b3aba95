//! Date helper functions

use chrono::NaiveDateTime;

/// Moment.js tokens and their chrono equivalents, longest first
const TOKENS: [(&str, &str); 14] = [
    ("YYYY", "%Y"),
    ("MMMM", "%B"),
    ("dddd", "%A"),
    ("DDDD", "%j"),
    ("MMM", "%b"),
    ("ddd", "%a"),
    ("SSS", "%3f"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("HH", "%H"),
    ("hh", "%I"),
    ("mm", "%M"),
    ("ss", "%S"),
];

/// Format a date using a Moment.js-style format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2024-01-15"
/// ```
pub fn format_date(date: &NaiveDateTime, format: &str) -> String {
    date.format(&moment_to_chrono_format(format)).to_string()
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    let mut result = String::with_capacity(format.len() * 2);
    let mut rest = format;

    'outer: while let Some(c) = rest.chars().next() {
        for (from, to) in TOKENS {
            if let Some(tail) = rest.strip_prefix(from) {
                result.push_str(to);
                rest = tail;
                continue 'outer;
            }
        }
        if c == '%' {
            result.push_str("%%");
        } else {
            result.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }

    result
}
