//! Account commands - show details, block, unblock

use anyhow::Result;

use super::{get_context, require_agent};
use crate::output;

pub async fn show(id: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    require_agent(&ctx)?;

    let pb = output::spinner("Loading account...");
    let result = ctx.directory_service.get_account(id).await;
    pb.finish_and_clear();

    match result? {
        Some(detail) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&detail)?);
                return Ok(());
            }
            println!("{}", output::account_table(&detail));
        }
        None => {
            if json {
                println!("null");
                return Ok(());
            }
            output::warning(&format!("No account with id {}", id));
        }
    }
    Ok(())
}

pub async fn block(id: &str) -> Result<()> {
    let ctx = get_context()?;
    require_agent(&ctx)?;

    let pb = output::spinner("Blocking account...");
    let result = ctx.directory_service.block(id).await;
    pb.finish_and_clear();

    let detail = result?;
    output::success(&format!("Account {} is now blocked", detail.id));
    println!("{}", output::account_table(&detail));
    Ok(())
}

pub async fn unblock(id: &str) -> Result<()> {
    let ctx = get_context()?;
    require_agent(&ctx)?;

    let pb = output::spinner("Unblocking account...");
    let result = ctx.directory_service.unblock(id).await;
    pb.finish_and_clear();

    let detail = result?;
    output::success(&format!("Account {} is now active", detail.id));
    println!("{}", output::account_table(&detail));
    Ok(())
}
