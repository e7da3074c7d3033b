/// Insert thousands separators into a non-negative whole number
fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Format a currency value with cents, e.g. `$81,960.40`
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Format a currency value rounded to whole dollars, e.g. `$81,960`
pub fn format_currency_short(value: f64) -> String {
    let dollars = value.abs().round() as u64;
    let sign = if value < 0.0 && dollars > 0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(dollars))
}

/// Format a probability as a whole percentage, e.g. `95%`
pub fn format_percentage(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}
