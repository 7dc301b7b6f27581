//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - In-memory mock backend for the SupportApi port
//! - Seed data standing in for the production user base
//! - Local filesystem (and an in-memory test double) for SessionStorage

pub mod mock;
pub mod seed;
pub mod storage;
