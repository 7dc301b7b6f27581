//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with formatting logic - no I/O or external dependencies.

mod agent;
pub mod report;
pub mod result;
mod transaction;
mod user;

pub use agent::{generate_token, AgentIdentity};
pub use transaction::{Transaction, TransactionKind};
pub use user::{User, UserStatus};
