//! Indonesian rupiah formatting: `Rp 135.700`.

/// Formats `amount` with `.` as the thousands separator and no fraction.
pub fn format_grouped(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

/// Formats `amount` as a rupiah price, e.g. `Rp 5.000`.
pub fn format_currency(amount: u64) -> String {
    format!("Rp {}", format_grouped(amount))
}
