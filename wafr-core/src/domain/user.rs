//! User domain model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account standing of a user
///
/// Blocked accounts stay in the collection and remain searchable; only the
/// status flag flips. Records are never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Blocked,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Blocked => "blocked",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A WafR end user as seen by a support agent
///
/// Phone numbers are assumed unique across records; `find_user_by_phone`
/// relies on that and returns the first exact match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub balance: Decimal,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user with required fields
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
            balance: Decimal::ZERO,
            status: UserStatus::Active,
            created_at: Utc::now(),
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.status == UserStatus::Blocked
    }
}
