//! Display formatting for dashboard numbers, following en-US grouping.

const MAX_FRACTION_DIGITS: usize = 3;

/// Groups the integer part with commas and keeps at most three fractional digits,
/// dropping trailing zeros (`1234567.5` → `"1,234,567.5"`).
pub fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let fixed = trim_fraction(&fixed);
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed, None),
    };

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if value.is_sign_negative() && fixed != "0" {
        out.push('-');
    }
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Dollar amount with grouping; negative amounts render as `-$5,000`.
pub fn currency(value: f64) -> String {
    let digits = grouped(value);
    match digits.strip_prefix('-') {
        Some(magnitude) => format!("-${magnitude}"),
        None => format!("${digits}"),
    }
}

pub fn per_month(value: f64) -> String {
    format!("{}/mo", currency(value))
}

pub fn percent(value: f64) -> String {
    format!("{}%", plain(value))
}

/// `value` against a fixed scale maximum, e.g. `"4.2 / 5.0"`.
pub fn out_of(value: f64, max: f64) -> String {
    format!("{} / {:.1}", plain(value), max)
}

/// Shortest decimal rendering without grouping (`87.0` → `"87"`, `4.25` → `"4.25"`).
pub(crate) fn plain(value: f64) -> String {
    value.to_string()
}

/// Rounds to one decimal place for ratios (`95.04` → `"95"`, `33.333` → `"33.3"`).
pub(crate) fn one_decimal(value: f64) -> String {
    trim_fraction(&format!("{value:.1}")).to_string()
}

fn trim_fraction(fixed: &str) -> &str {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed
    }
}
