//! Output formatting utilities

use std::time::Duration;

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use wafr_core::services::AccountDetail;
use wafr_core::UserStatus;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Render an account status with color
pub fn format_status(status: UserStatus) -> String {
    match status {
        UserStatus::Active => "active".green().to_string(),
        UserStatus::Blocked => "blocked".red().to_string(),
    }
}

/// Key-value table for one account
pub fn account_table(detail: &AccountDetail) -> Table {
    let mut table = create_table();
    table.add_row(vec!["Id", &detail.id]);
    table.add_row(vec!["Name", &detail.name]);
    table.add_row(vec!["Phone", &detail.phone_number]);
    table.add_row(vec!["Email", &detail.email]);
    table.add_row(vec!["Balance", &format!("${}", detail.balance)]);
    table.add_row(vec!["Status", &format_status(detail.status)]);
    table.add_row(vec![
        "Created",
        &detail.created_at.format("%Y-%m-%d").to_string(),
    ]);
    table.add_row(vec!["Transactions", &detail.transaction_count.to_string()]);
    table
}

/// Spinner shown while the mock backend simulates latency
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .expect("static spinner template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
