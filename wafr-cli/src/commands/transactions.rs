//! Transactions command - list a user's history

use anyhow::Result;
use colored::Colorize;

use super::{get_context, require_agent};
use crate::output;

pub async fn run(user_id: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    require_agent(&ctx)?;

    let pb = output::spinner("Loading transactions...");
    let result = ctx.transaction_service.list_for_user(user_id).await;
    pb.finish_and_clear();

    let rows = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        output::warning(&format!("No transactions for user {}", user_id));
        return Ok(());
    }

    println!("{}", format!("Transactions for user {}", user_id).bold());
    let mut table = output::create_table();
    table.set_header(vec!["Date", "Type", "Amount", "Description"]);
    for row in &rows {
        table.add_row(vec![
            row.date.clone(),
            row.kind.to_string(),
            format!("${}", row.amount),
            row.description.clone(),
        ]);
    }
    println!("{}", table);
    Ok(())
}
