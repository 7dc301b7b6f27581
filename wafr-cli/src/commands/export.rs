//! Export command - write a transaction report to disk

use std::path::PathBuf;

use anyhow::Result;

use super::{get_context, require_agent};
use crate::output;

pub async fn run(user_id: &str, output_path: Option<PathBuf>) -> Result<()> {
    let ctx = get_context()?;
    require_agent(&ctx)?;

    let path = output_path.unwrap_or_else(|| PathBuf::from(format!("wafr-report-{}.txt", user_id)));

    let pb = output::spinner("Exporting report...");
    let result = ctx.report_service.export_to_file(user_id, &path).await;
    pb.finish_and_clear();

    let export = result?;
    output::success(&format!(
        "Report written to {} ({} bytes)",
        export.path.display(),
        export.bytes_written
    ));
    Ok(())
}
