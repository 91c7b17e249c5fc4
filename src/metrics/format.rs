/// Signed, thousands-separated currency string with two decimals.
/// A missing value renders as "$0.00".
pub fn format_currency(value: Option<f64>) -> String {
    let value = match value {
        Some(v) => v,
        None => return "$0.00".to_string(),
    };

    let sign = if value >= 0.0 { "+" } else { "-" };
    format!("{}${}", sign, group_thousands(value.abs()))
}

/// Signed percentage string. A missing value renders as "0%".
pub fn format_percentage(value: Option<f64>) -> String {
    let value = match value {
        Some(v) => v,
        None => return "0%".to_string(),
    };

    if value >= 0.0 {
        format!("+{}%", value)
    } else {
        format!("{}%", value)
    }
}

fn group_thousands(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped}.{frac_part}")
}
