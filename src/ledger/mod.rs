//! Access to on-chain account state.
//!
//! The rest of the service only depends on [`LedgerClient`], so the HTTP
//! adapter in [`client`] can be swapped for a stub in tests.

pub mod client;

use async_trait::async_trait;

pub use client::{LedgerError, TronClient};

/// Account metrics as reported by the node. Any field the node omits is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub bandwidth: Option<i64>,
    pub energy: Option<i64>,
    pub balance: Option<i64>,
}

#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Fetch the current account state for `address`.
    async fn fetch_account(&self, address: &str) -> Result<AccountSnapshot, LedgerError>;
}
