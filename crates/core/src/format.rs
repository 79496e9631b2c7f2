//! Display formatting for monetary and percentage values.

/// Format a value as currency with exactly two decimals and grouped thousands.
///
/// `currency_with_2_decimals(1234.5, "$")` → `"$1,234.50"`,
/// negative values keep the sign in front of the symbol: `"-$3.10"`.
pub fn currency_with_2_decimals(value: f64, symbol: &str) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{symbol}{}.{frac}", group_thousands(whole))
}

/// Format a number with a magnitude suffix: `Tr`, `Bn`, `M`, `K`.
///
/// Values below one thousand are printed with two decimals and no suffix.
pub fn with_abbreviations(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let num = value.abs();

    let (scaled, suffix) = if num >= 1_000_000_000_000.0 {
        (num / 1_000_000_000_000.0, "Tr")
    } else if num >= 1_000_000_000.0 {
        (num / 1_000_000_000.0, "Bn")
    } else if num >= 1_000_000.0 {
        (num / 1_000_000.0, "M")
    } else if num >= 1_000.0 {
        (num / 1_000.0, "K")
    } else {
        (num, "")
    };

    format!("{sign}{scaled:.2}{suffix}")
}

/// Format a percentage with two decimals: `40.123` → `"40.12%"`.
pub fn percent_string(value: f64) -> String {
    format!("{value:.2}%")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
