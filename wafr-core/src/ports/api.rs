//! Support API port - data access abstraction

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::{Transaction, User};

/// Support data-access abstraction
///
/// This trait defines every operation the console performs against the
/// backend. The only implementation in this repository is the in-memory
/// mock adapter; the contract is written as if a real service sat behind
/// it.
///
/// Absence semantics differ per operation on purpose: lookups report a
/// miss as `Ok(None)` / an empty list, while block/unblock fail with
/// `UserNotFound` for an unknown id.
#[async_trait]
pub trait SupportApi: Send + Sync {
    // === Users ===

    /// Find a user by exact phone number match (first hit wins)
    async fn find_user_by_phone(&self, phone: &str) -> Result<Option<User>>;

    /// Find a user by identifier
    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Block a user's account, returning the updated record
    async fn block_user(&self, id: &str) -> Result<User>;

    /// Unblock a user's account, returning the updated record
    async fn unblock_user(&self, id: &str) -> Result<User>;

    // === Transactions ===

    /// List a user's transactions in stored order (empty for unknown users)
    async fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>>;

    /// Render the user's transaction report as a downloadable artifact
    async fn export_report(&self, user_id: &str) -> Result<ReportArtifact>;
}

/// A rendered export artifact
#[derive(Debug, Clone)]
pub struct ReportArtifact {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ReportArtifact {
    /// Create a text/plain artifact
    pub fn plain_text(content: String) -> Self {
        Self {
            content_type: "text/plain".to_string(),
            bytes: content.into_bytes(),
        }
    }

    /// The artifact body as UTF-8 text, if it is text
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}
