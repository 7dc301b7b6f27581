//! In-memory mock backend
//!
//! `MockApi` stands in for the real WafR backend: it owns the user and
//! transaction collections outright and serves every `SupportApi`
//! operation from memory after a simulated network delay. There is no
//! transport, no retry and no partial failure - each call either fully
//! succeeds or fails with one error kind.
//!
//! The delay figures match the original service's observed latencies and
//! carry no correctness semantics; tests run with `Latency::none()`.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::seed::{seed_transactions, seed_users};
use crate::domain::report::render_report;
use crate::domain::result::{Error, Result};
use crate::domain::{Transaction, User, UserStatus};
use crate::ports::{ReportArtifact, SupportApi};

const SEARCH_DELAY_MS: u64 = 600;
const GET_DELAY_MS: u64 = 400;
const BLOCK_DELAY_MS: u64 = 700;
const LIST_DELAY_MS: u64 = 800;
const EXPORT_DELAY_MS: u64 = 1000;

/// Artificial latency knob shared by the mock backend and the session
/// service
#[derive(Debug, Clone, Copy)]
pub struct Latency {
    enabled: bool,
}

impl Latency {
    /// Simulate per-operation delays (the interactive default)
    pub fn simulated() -> Self {
        Self { enabled: true }
    }

    /// No delays (tests, CI)
    pub fn none() -> Self {
        Self { enabled: false }
    }

    pub fn from_config(simulate: bool) -> Self {
        Self { enabled: simulate }
    }

    /// Await the configured delay for one operation
    pub async fn simulate(&self, ms: u64) {
        if self.enabled {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

/// The in-memory mock backend
///
/// Exclusively owns both collections; constructed explicitly at startup
/// (or per test), never shared ambient state. Mutation happens
/// synchronously once the simulated delay elapses, and locks are never
/// held across an await point.
pub struct MockApi {
    users: Mutex<Vec<User>>,
    transactions: Mutex<HashMap<String, Vec<Transaction>>>,
    latency: Latency,
}

impl MockApi {
    /// Create a mock backend populated with the seed records
    pub fn new(latency: Latency) -> Self {
        Self::with_data(seed_users(), seed_transactions(), latency)
    }

    /// Create a mock backend with explicit collections (tests)
    pub fn with_data(
        users: Vec<User>,
        transactions: HashMap<String, Vec<Transaction>>,
        latency: Latency,
    ) -> Self {
        Self {
            users: Mutex::new(users),
            transactions: Mutex::new(transactions),
            latency,
        }
    }

    fn set_status(&self, id: &str, status: UserStatus) -> Result<User> {
        let mut users = self.users.lock().expect("users lock poisoned");
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.status = status;
                Ok(user.clone())
            }
            None => Err(Error::user_not_found(id)),
        }
    }
}

#[async_trait]
impl SupportApi for MockApi {
    async fn find_user_by_phone(&self, phone: &str) -> Result<Option<User>> {
        self.latency.simulate(SEARCH_DELAY_MS).await;
        let users = self.users.lock().expect("users lock poisoned");
        Ok(users.iter().find(|u| u.phone_number == phone).cloned())
    }

    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>> {
        self.latency.simulate(GET_DELAY_MS).await;
        let users = self.users.lock().expect("users lock poisoned");
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn block_user(&self, id: &str) -> Result<User> {
        self.latency.simulate(BLOCK_DELAY_MS).await;
        self.set_status(id, UserStatus::Blocked)
    }

    async fn unblock_user(&self, id: &str) -> Result<User> {
        self.latency.simulate(BLOCK_DELAY_MS).await;
        self.set_status(id, UserStatus::Active)
    }

    async fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>> {
        self.latency.simulate(LIST_DELAY_MS).await;
        let transactions = self.transactions.lock().expect("transactions lock poisoned");
        Ok(transactions.get(user_id).cloned().unwrap_or_default())
    }

    async fn export_report(&self, user_id: &str) -> Result<ReportArtifact> {
        self.latency.simulate(EXPORT_DELAY_MS).await;
        let user = {
            let users = self.users.lock().expect("users lock poisoned");
            users.iter().find(|u| u.id == user_id).cloned()
        };
        let txs = {
            let transactions = self.transactions.lock().expect("transactions lock poisoned");
            transactions.get(user_id).cloned().unwrap_or_default()
        };
        Ok(ReportArtifact::plain_text(render_report(
            user.as_ref(),
            &txs,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_api() -> MockApi {
        MockApi::new(Latency::none())
    }

    #[tokio::test]
    async fn test_find_user_by_phone_hit_and_miss() {
        let api = test_api();

        let user = api.find_user_by_phone("1234567890").await.unwrap();
        assert_eq!(user.unwrap().name, "John Doe");

        let missing = api.find_user_by_phone("0000000000").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_block_then_unblock_restores_active() {
        let api = test_api();

        let blocked = api.block_user("1").await.unwrap();
        assert_eq!(blocked.status, UserStatus::Blocked);

        let unblocked = api.unblock_user("1").await.unwrap();
        assert_eq!(unblocked.status, UserStatus::Active);
    }

    #[tokio::test]
    async fn test_block_is_idempotent() {
        let api = test_api();

        let first = api.block_user("2").await.unwrap();
        let second = api.block_user("2").await.unwrap();
        assert_eq!(first.status, UserStatus::Blocked);
        assert_eq!(second.status, UserStatus::Blocked);
    }

    #[tokio::test]
    async fn test_block_unknown_user_fails() {
        let api = test_api();

        let err = api.block_user("nope").await.unwrap_err();
        assert!(matches!(err, Error::UserNotFound(_)));
    }

    #[tokio::test]
    async fn test_list_transactions_empty_for_unknown_user() {
        let api = test_api();

        // Unknown id and a known user without transactions both come back
        // empty, never as an error
        assert!(api.list_transactions("unknown").await.unwrap().is_empty());
        assert!(api.list_transactions("3").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_status_change_visible_through_phone_search() {
        let api = test_api();

        // Seed user 3 starts blocked
        let before = api.find_user_by_phone("5551234567").await.unwrap().unwrap();
        assert_eq!(before.status, UserStatus::Blocked);

        api.unblock_user(&before.id).await.unwrap();

        let after = api.find_user_by_phone("5551234567").await.unwrap().unwrap();
        assert_eq!(after.status, UserStatus::Active);
    }

    #[tokio::test]
    async fn test_export_report_is_plain_text() {
        let api = test_api();

        let artifact = api.export_report("2").await.unwrap();
        assert_eq!(artifact.content_type, "text/plain");
        let text = artifact.as_text().unwrap();
        assert!(text.contains("User: Jane Smith"));
        assert!(text.contains("2024-03-20 - credit: $750.5 - Deposit"));
    }

    #[tokio::test]
    async fn test_export_report_for_unknown_user_renders_placeholders() {
        let api = test_api();

        let artifact = api.export_report("unknown").await.unwrap();
        let text = artifact.as_text().unwrap();
        assert!(text.contains("User: Unknown"));
        assert!(text.contains("Balance: $0"));
    }
}
