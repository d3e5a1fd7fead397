pub fn display_token_amount(amount: impl Into<u128>, decimals: impl Into<u32>) -> String {
    let amount = amount.into();
    let decimals = decimals.into();
    // past 38 decimals the factor exceeds any u128, so everything is fractional
    let (integer_part, fractional_part) = match 10u128.checked_pow(decimals) {
        Some(factor) => (amount / factor, amount % factor),
        None => (0, amount),
    };

    if decimals == 0 {
        return integer_part.to_string();
    }

    // Adjust the width dynamically based on decimals
    let fractional_str = format!("{:0width$}", fractional_part, width = decimals as usize);

    // Trim trailing zeros for a cleaner display
    let trimmed_fractional = fractional_str.trim_end_matches('0');

    if trimmed_fractional.is_empty() {
        integer_part.to_string()
    } else {
        format!("{}.{}", integer_part, trimmed_fractional)
    }
}

/// Formats a price-like number with up to 6 fractional digits, dropping trailing zeros.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }

    let formatted = if value.abs() >= 1_000.0 {
        format!("{value:.2}")
    } else if value.abs() >= 0.0001 {
        format!("{value:.6}")
    } else {
        format!("{value:.10}")
    };

    trim_fraction(formatted)
}

pub fn format_usd(value: f64) -> String {
    if value > 0.0 && value < 0.01 {
        "<$0.01".to_string()
    } else {
        format!("${value:.2}")
    }
}

fn trim_fraction(formatted: String) -> String {
    if !formatted.contains('.') {
        return formatted;
    }
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
