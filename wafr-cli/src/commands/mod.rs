//! CLI command implementations

pub mod account;
pub mod auth;
pub mod export;
pub mod search;
pub mod transactions;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use wafr_core::{AgentIdentity, ConsoleContext};

/// Get the wafr directory from environment or default
pub fn get_wafr_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("WAFR_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".wafr")
    }
}

/// Get or create the console context
pub fn get_context() -> Result<ConsoleContext> {
    let wafr_dir = get_wafr_dir();

    std::fs::create_dir_all(&wafr_dir)
        .with_context(|| format!("Failed to create wafr directory: {:?}", wafr_dir))?;

    ConsoleContext::new(&wafr_dir).context("Failed to initialize console context")
}

/// Require an authenticated session for data-facing commands
pub fn require_agent(ctx: &ConsoleContext) -> Result<AgentIdentity> {
    match ctx.session_service.current() {
        Some(identity) => Ok(identity),
        None => bail!("Not signed in. Run `wafr login <email>` first."),
    }
}
