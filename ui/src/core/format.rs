//! Formatting helpers for presenting metrics.

/// Thousands-grouped integer display, e.g. `12345` → `"12,345"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.0}%")
}

pub fn format_percent_precise(value: f64) -> String {
    format!("{value:.1}%")
}

/// Signed whole-number delta, e.g. `+4` / `-12`.
pub fn format_signed(value: f64) -> String {
    format!("{value:+.0}")
}

pub fn format_ms(value: f64) -> String {
    format!("{value:.0}ms")
}

/// Cumulative Layout Shift is unitless and meaningful to three decimals.
pub fn format_cls(value: f64) -> String {
    format!("{value:.3}")
}

pub fn format_score(value: f64) -> String {
    format!("{value:.0}/100")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_group_by_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn signed_deltas_carry_their_sign() {
        assert_eq!(format_signed(4.2), "+4");
        assert_eq!(format_signed(-11.7), "-12");
        assert_eq!(format_signed(0.0), "+0");
    }

    #[test]
    fn cls_keeps_three_decimals() {
        assert_eq!(format_cls(0.0512), "0.051");
    }
}
