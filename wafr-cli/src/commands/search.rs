//! Search command - find a user by phone number

use anyhow::Result;

use super::{get_context, require_agent};
use crate::output;

pub async fn run(phone: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    require_agent(&ctx)?;

    let pb = output::spinner("Searching...");
    let result = ctx.directory_service.search_by_phone(phone).await;
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
            output::warning(&format!("No user found with phone {}", phone));
        }
    }
    Ok(())
}
