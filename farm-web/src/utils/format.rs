//! Number formatting for prices and price changes.
//!
//! Prices render as whole rupees with Indian digit grouping (lakh/crore
//! style: last three digits, then groups of two), matching what farmers
//! see in mandi bulletins.

/// Format an amount as whole rupees, e.g. `1234567.0` -> `"₹12,34,567"`.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = amount.abs().round() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::new();
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        grouped.push(ch);
        let remaining = len - i - 1;
        // separators fall before the last 3 digits and every 2 after that
        if remaining > 0 && (remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0)) {
            grouped.push(',');
        }
    }

    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Format a percent change with an explicit sign, e.g. `2.3` -> `"+2.3%"`.
pub fn format_change(change: f64) -> String {
    if change >= 0.0 {
        format!("+{change:.1}%")
    } else {
        format!("{change:.1}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(850.0), "₹850");
        assert_eq!(format_inr(2150.0), "₹2,150");
        assert_eq!(format_inr(25000.0), "₹25,000");
        assert_eq!(format_inr(123456.0), "₹1,23,456");
        assert_eq!(format_inr(12345678.0), "₹1,23,45,678");
    }

    #[test]
    fn test_rounding_and_sign() {
        assert_eq!(format_inr(2149.6), "₹2,150");
        assert_eq!(format_inr(-1200.0), "-₹1,200");
    }

    #[test]
    fn test_change_sign() {
        assert_eq!(format_change(2.34), "+2.3%");
        assert_eq!(format_change(0.0), "+0.0%");
        assert_eq!(format_change(-1.4), "-1.4%");
    }
}
