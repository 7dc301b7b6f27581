//! WafR Core - Business logic for the support agent console
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (User, Transaction, AgentIdentity)
//! - **ports**: Trait definitions for external dependencies (SupportApi, SessionStorage)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (in-memory mock backend, file storage)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::mock::{Latency, MockApi};
use adapters::storage::FileSessionStorage;
use config::Config;
use services::{DirectoryService, ReportService, SessionService, TransactionService};

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{AgentIdentity, Transaction, TransactionKind, User, UserStatus};
pub use ports::{ReportArtifact, SessionStorage, SupportApi};

/// Main context for console operations
///
/// This is the primary entry point for all business logic. It holds the
/// mock backend, configuration, and all services.
pub struct ConsoleContext {
    pub config: Config,
    pub api: Arc<MockApi>,
    pub session_service: SessionService,
    pub directory_service: DirectoryService,
    pub transaction_service: TransactionService,
    pub report_service: ReportService,
}

impl ConsoleContext {
    /// Create a new console context rooted at the application directory
    pub fn new(wafr_dir: &Path) -> Result<Self> {
        let config = Config::load(wafr_dir)?;
        let latency = Latency::from_config(config.simulate_latency);

        let api = Arc::new(MockApi::new(latency));
        let storage = Arc::new(FileSessionStorage::new(wafr_dir));

        let session_service = SessionService::new(storage, latency);
        let directory_service = DirectoryService::new(Arc::clone(&api));
        let transaction_service = TransactionService::new(Arc::clone(&api));
        let report_service = ReportService::new(Arc::clone(&api));

        Ok(Self {
            config,
            api,
            session_service,
            directory_service,
            transaction_service,
            report_service,
        })
    }
}
