//! Number and duration formatting shared by the reports.

use std::time::Instant;

use crate::filters::RULE_WIDTH;

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two decimal places with thousands separators: `1234.5` -> `"1,234.50"`.
pub fn group_decimal(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let grouped = match int_part.parse::<usize>() {
        Ok(n) => group_thousands(n),
        Err(_) => int_part.to_string(),
    };
    let rounds_to_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !rounds_to_zero { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Splits `seconds` into hours, minutes and seconds with floor division, then
/// prints each component with two decimals.
///
/// Hours and minutes are always whole numbers here, yet still shown as `1.00`;
/// only the seconds component can carry a fraction.
pub fn format_duration(seconds: f64) -> String {
    let minutes = seconds.div_euclid(60.0);
    let secs = seconds.rem_euclid(60.0);
    let hours = minutes.div_euclid(60.0);
    let minutes = minutes.rem_euclid(60.0);

    format!(
        "{} hours, {} minutes, and {} seconds",
        group_decimal(hours),
        group_decimal(minutes),
        group_decimal(secs)
    )
}

pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Closing lines of every report.
pub fn footer(started: Instant) -> String {
    format!(
        "\nThis took {} seconds.\n{}",
        started.elapsed().as_secs_f64(),
        rule()
    )
}

/// Left-aligned values next to right-aligned, grouped counts.
pub fn format_counts<T: ToString>(counts: &[(T, usize)]) -> String {
    let rows: Vec<(String, String)> = counts
        .iter()
        .map(|(value, count)| (value.to_string(), group_thousands(*count)))
        .collect();

    // `{:<w$}` pads by chars, so widths are measured the same way
    let value_width = rows.iter().map(|(v, _)| v.chars().count()).max().unwrap_or(0);
    let count_width = rows.iter().map(|(_, c)| c.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for (value, count) in rows {
        out.push_str(&format!("   {value:<value_width$}  {count:>count_width$}\n"));
    }
    out
}
