//! Digit grouping for display values.
//!
//! Grouping is display-only. Stored values stay numeric; a grouped string must
//! go through [`strip_grouping`] before it is parsed again.

/// Inserted between every group of three integer digits
pub const GROUP_SEPARATOR: char = '.';
/// Separates the integer part from the fraction
pub const DECIMAL_SEPARATOR: char = ',';

/// Group an integer: 149597870700 -> "149.597.870.700"
pub fn group_digits(n: u64) -> String {
    insert_separators(&n.to_string())
}

/// Group the integer part of a plain numeric string such as a raw slider value.
///
/// A `.` in the input is read as a decimal point, so an already grouped string
/// is not a valid input. Anything that is not a run of ASCII digits is
/// returned unchanged.
pub fn group_numeric_str(raw: &str) -> String {
    let raw = raw.trim();
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    let mut out = insert_separators(int_part.trim_start_matches('0'));
    if out.is_empty() {
        out.push('0');
    }
    if let Some(frac) = frac_part {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac);
    }
    out
}

/// Group a float with a fixed number of fraction digits: 1674.4 -> "1.674,4"
pub fn group_decimal(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let grouped = group_numeric_str(&fixed);
    if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Remove every group separator and parse what is left.
pub fn strip_grouping(grouped: &str) -> Option<u64> {
    let digits: String = grouped
        .trim()
        .chars()
        .filter(|c| *c != GROUP_SEPARATOR)
        .collect();
    digits.parse().ok()
}

fn insert_separators(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
