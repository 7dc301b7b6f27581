//! Transaction report rendering
//!
//! Pure formatting of the text/plain export artifact. The template is
//! fixed; absent user fields render as "Unknown" (balance as 0) instead of
//! failing, so a report can always be produced for any user id.

use rust_decimal::Decimal;

use super::{Transaction, User};

/// Render the fixed-format transaction report
///
/// Transaction lines appear in the order given, one per stored record:
/// `<date> - <credit|debit>: $<amount> - <description>`.
pub fn render_report(user: Option<&User>, transactions: &[Transaction]) -> String {
    let name = user.map(|u| u.name.as_str()).unwrap_or("Unknown");
    let phone = user.map(|u| u.phone_number.as_str()).unwrap_or("Unknown");
    let balance = user
        .map(|u| format_amount(u.balance))
        .unwrap_or_else(|| "0".to_string());
    let status = user
        .map(|u| u.status.to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    let mut report = String::new();
    report.push_str("WafR Transaction Report\n");
    report.push_str(&format!("User: {}\n", name));
    report.push_str(&format!("Phone: {}\n", phone));
    report.push_str(&format!("Balance: ${}\n", balance));
    report.push_str(&format!("Status: {}\n", status));
    report.push('\n');
    report.push_str("Transactions:\n");
    for tx in transactions {
        report.push_str(&format!(
            "{} - {}: ${} - {}\n",
            tx.created_at.format("%Y-%m-%d"),
            tx.kind,
            format_amount(tx.amount),
            tx.description
        ));
    }
    report
}

/// Format a monetary amount without trailing zero noise (750.50 -> "750.5")
fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}
