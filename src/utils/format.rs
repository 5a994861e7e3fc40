// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Number formatting for calculator output (en-US grouping).

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Format with thousands separators and a fixed number of decimals.
///
/// ```
/// use the_toolbench::utils::format_number;
///
/// assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_number(-0.004, 2), "0.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Currency with two decimals, sign before the symbol: `-$1,200.00`.
pub fn format_currency(value: f64, symbol: &str) -> String {
    let formatted = format_number(value, 2);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-{symbol}{rest}"),
        None => format!("{symbol}{formatted}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_grouping() {
        let cases = vec![
            (0.0, 2, "0.00"),
            (999.0, 0, "999"),
            (1000.0, 0, "1,000"),
            (123456.789, 1, "123,456.8"),
            (-98765.4321, 2, "-98,765.43"),
        ];
        for (value, decimals, expected) in cases {
            assert_eq!(format_number(value, decimals), expected, "value {value}");
        }
    }

    #[test]
    fn currency_places_sign_first() {
        assert_eq!(format_currency(1135.58, "$"), "$1,135.58");
        assert_eq!(format_currency(-50.0, "€"), "-€50.00");
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(22.857142, 2), 22.86);
        assert_eq!(round_to(2.5, 0), 3.0);
    }
}
