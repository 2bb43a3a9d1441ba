// domain/format.rs

use serde_json::Value;

/// Parses a raw field value into a finite number.
///
/// Numbers are taken as-is. Strings are stripped of everything except
/// digits, `.` and `-` first, so `"$450,000"` parses to `450000.0`.
/// Anything else, or a string that still fails to parse, yields `None`.
pub fn parse_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            cleaned.parse::<f64>().ok()?
        }
        _ => return None,
    };

    n.is_finite().then_some(n)
}

/// Whole-dollar USD, e.g. `$1,250,000` or `-$5`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(&digits))
}

/// en-US number with thousands separators and up to three fraction digits.
pub fn format_number(n: f64) -> String {
    let fixed = format!("{:.3}", n.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let is_zero = int_part.chars().all(|c| c == '0') && frac.is_empty();
    let sign = if n < 0.0 && !is_zero { "-" } else { "" };

    if frac.is_empty() {
        format!("{sign}{}", group_thousands(int_part))
    } else {
        format!("{sign}{}.{frac}", group_thousands(int_part))
    }
}

/// Plain integer with no separators, used for years.
pub fn format_plain_integer(n: f64) -> String {
    format!("{:.0}", n.round())
}

/// Renders a scalar as display text. Objects, arrays and booleans are not text.
pub fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
            _ => n.to_string(),
        }),
        _ => None,
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
