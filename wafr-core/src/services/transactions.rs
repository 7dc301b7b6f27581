//! Transaction service - transaction history for display

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::adapters::mock::MockApi;
use crate::domain::result::Result;
use crate::domain::TransactionKind;
use crate::ports::SupportApi;

/// Transaction service for listing a user's history
pub struct TransactionService {
    api: Arc<MockApi>,
}

impl TransactionService {
    pub fn new(api: Arc<MockApi>) -> Self {
        Self { api }
    }

    /// List the user's transactions in stored order
    ///
    /// Unknown users get an empty list, never a failure.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<TransactionRow>> {
        let transactions = self.api.list_transactions(user_id).await?;
        Ok(transactions
            .into_iter()
            .map(|tx| TransactionRow {
                id: tx.id,
                date: tx.created_at.format("%Y-%m-%d").to_string(),
                kind: tx.kind,
                amount: tx.amount,
                description: tx.description,
            })
            .collect())
    }
}

/// One transaction line for display
#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
}
