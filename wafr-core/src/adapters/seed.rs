//! Seed data for the mock backend
//!
//! Fixed records standing in for the production user base. The phone
//! numbers are unique; search-by-phone correctness depends on that.
//! User "3" intentionally has no transactions and starts blocked, which
//! the unblock flow and empty-list behavior are exercised against.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::domain::{Transaction, TransactionKind, User, UserStatus};

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

/// Generate the seed users
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            phone_number: "1234567890".to_string(),
            email: "john@example.com".to_string(),
            balance: Decimal::new(125075, 2), // $1,250.75
            status: UserStatus::Active,
            created_at: ts(2024, 1, 15, 10, 0),
        },
        User {
            id: "2".to_string(),
            name: "Jane Smith".to_string(),
            phone_number: "9876543210".to_string(),
            email: "jane@example.com".to_string(),
            balance: Decimal::new(75050, 2), // $750.50
            status: UserStatus::Active,
            created_at: ts(2024, 2, 20, 14, 30),
        },
        User {
            id: "3".to_string(),
            name: "Robert Johnson".to_string(),
            phone_number: "5551234567".to_string(),
            email: "robert@example.com".to_string(),
            balance: Decimal::ZERO,
            status: UserStatus::Blocked,
            created_at: ts(2024, 3, 5, 9, 45),
        },
    ]
}

/// Generate the seed transactions, keyed by owning user id
pub fn seed_transactions() -> HashMap<String, Vec<Transaction>> {
    let mut map = HashMap::new();

    map.insert(
        "1".to_string(),
        vec![
            Transaction::new(
                "t1",
                "1",
                Decimal::new(500, 0),
                TransactionKind::Credit,
                "Deposit",
                ts(2024, 4, 1, 15, 30),
            ),
            Transaction::new(
                "t2",
                "1",
                Decimal::new(50, 0),
                TransactionKind::Debit,
                "Purchase at Market",
                ts(2024, 4, 5, 10, 15),
            ),
            Transaction::new(
                "t3",
                "1",
                Decimal::new(800, 0),
                TransactionKind::Credit,
                "Salary",
                ts(2024, 4, 10, 9, 0),
            ),
        ],
    );

    map.insert(
        "2".to_string(),
        vec![
            Transaction::new(
                "t4",
                "2",
                Decimal::new(7505, 1), // 750.5
                TransactionKind::Credit,
                "Deposit",
                ts(2024, 3, 20, 11, 45),
            ),
            Transaction::new(
                "t5",
                "2",
                Decimal::new(120, 0),
                TransactionKind::Debit,
                "Online Shopping",
                ts(2024, 3, 25, 14, 20),
            ),
        ],
    );

    map.insert("3".to_string(), Vec::new());

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_phone_numbers_are_unique() {
        let users = seed_users();
        let mut phones: Vec<&str> = users.iter().map(|u| u.phone_number.as_str()).collect();
        phones.sort();
        phones.dedup();
        assert_eq!(phones.len(), users.len());
    }

    #[test]
    fn test_seed_transactions_reference_seed_users() {
        let users = seed_users();
        let transactions = seed_transactions();
        for (user_id, txs) in &transactions {
            assert!(users.iter().any(|u| &u.id == user_id));
            for tx in txs {
                assert_eq!(&tx.user_id, user_id);
            }
        }
    }

    #[test]
    fn test_blocked_seed_user_has_no_transactions() {
        let transactions = seed_transactions();
        assert!(transactions.get("3").unwrap().is_empty());
    }
}
