//! Directory service - account lookup and block/unblock

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::adapters::mock::MockApi;
use crate::domain::result::Result;
use crate::domain::{User, UserStatus};
use crate::ports::SupportApi;

/// Directory service for account lookup and moderation
pub struct DirectoryService {
    api: Arc<MockApi>,
}

impl DirectoryService {
    pub fn new(api: Arc<MockApi>) -> Self {
        Self { api }
    }

    /// Search for an account by exact phone number
    ///
    /// A miss is `Ok(None)`, not an error - callers distinguish "nothing
    /// matched" from "operation failed".
    pub async fn search_by_phone(&self, phone: &str) -> Result<Option<AccountDetail>> {
        match self.api.find_user_by_phone(phone).await? {
            Some(user) => Ok(Some(self.detail(user).await?)),
            None => Ok(None),
        }
    }

    /// Look up an account by identifier
    pub async fn get_account(&self, id: &str) -> Result<Option<AccountDetail>> {
        match self.api.find_user_by_id(id).await? {
            Some(user) => Ok(Some(self.detail(user).await?)),
            None => Ok(None),
        }
    }

    /// Block the account, failing with `UserNotFound` for unknown ids
    pub async fn block(&self, id: &str) -> Result<AccountDetail> {
        let user = self.api.block_user(id).await?;
        info!(user_id = %user.id, "account blocked");
        self.detail(user).await
    }

    /// Unblock the account, failing with `UserNotFound` for unknown ids
    pub async fn unblock(&self, id: &str) -> Result<AccountDetail> {
        let user = self.api.unblock_user(id).await?;
        info!(user_id = %user.id, "account unblocked");
        self.detail(user).await
    }

    async fn detail(&self, user: User) -> Result<AccountDetail> {
        let transaction_count = self.api.list_transactions(&user.id).await?.len();
        Ok(AccountDetail {
            id: user.id,
            name: user.name,
            phone_number: user.phone_number,
            email: user.email,
            balance: user.balance,
            status: user.status,
            created_at: user.created_at,
            transaction_count,
        })
    }
}

/// Account summary for display
#[derive(Debug, Clone, Serialize)]
pub struct AccountDetail {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub balance: Decimal,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub transaction_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::Latency;
    use crate::domain::result::Error;

    fn service() -> DirectoryService {
        DirectoryService::new(Arc::new(MockApi::new(Latency::none())))
    }

    #[tokio::test]
    async fn test_search_returns_detail_with_transaction_count() {
        let svc = service();

        let detail = svc.search_by_phone("1234567890").await.unwrap().unwrap();
        assert_eq!(detail.name, "John Doe");
        assert_eq!(detail.transaction_count, 3);
    }

    #[tokio::test]
    async fn test_search_miss_is_none() {
        let svc = service();
        assert!(svc.search_by_phone("0000000000").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_block_unknown_id_propagates_not_found() {
        let svc = service();
        let err = svc.block("missing").await.unwrap_err();
        assert!(matches!(err, Error::UserNotFound(_)));
    }

    #[tokio::test]
    async fn test_unblock_reflects_in_subsequent_search() {
        let svc = service();

        let detail = svc.search_by_phone("5551234567").await.unwrap().unwrap();
        assert_eq!(detail.status, UserStatus::Blocked);

        svc.unblock(&detail.id).await.unwrap();

        let after = svc.search_by_phone("5551234567").await.unwrap().unwrap();
        assert_eq!(after.status, UserStatus::Active);
    }
}
