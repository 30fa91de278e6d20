//! Money formatting

/// Currency symbol prefixed to every rendered amount
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format an amount with thousands separators and a fixed number of decimals
///
/// `group_thousands(4969.0, 2)` is `"4,969.00"`.
pub fn group_thousands(amount: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, amount.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }

    // Rounded-to-zero values drop the sign
    let is_zero = !formatted.bytes().any(|b| matches!(b, b'1'..=b'9'));
    if amount < 0.0 && !is_zero {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format an amount as currency, e.g. `₹1,500.00`
pub fn format_currency(amount: f64, decimals: usize) -> String {
    let grouped = group_thousands(amount, decimals);
    match grouped.strip_prefix('-') {
        Some(positive) => format!("-{}{}", CURRENCY_SYMBOL, positive),
        None => format!("{}{}", CURRENCY_SYMBOL, grouped),
    }
}
