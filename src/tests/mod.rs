//! Shared fixtures for the in-crate test suites.

mod service_tests;

use crate::{
    api,
    db::connection,
    ledger::{AccountSnapshot, LedgerClient, LedgerError},
    state::AppState,
};
use async_trait::async_trait;
use axum::Router;
use sqlx::SqlitePool;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

pub const USDT_CONTRACT: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";
pub const ADDRESS_1: &str = "TPL6W6Z4R7fKxe8f5zaog9kYk1L5qiuxgQ";
pub const ADDRESS_2: &str = "TBWagnyV6FwR5mcjvZx24dF3B2KBkYYonv";

/// In-memory ledger: known addresses answer with their snapshot, anything
/// else fails the way an unactivated account does.
#[derive(Default)]
pub struct StubLedger {
    accounts: HashMap<String, AccountSnapshot>,
    calls: AtomicUsize,
}

impl StubLedger {
    pub fn with_account(mut self, address: &str, snapshot: AccountSnapshot) -> Self {
        self.accounts.insert(address.to_string(), snapshot);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LedgerClient for StubLedger {
    async fn fetch_account(&self, address: &str) -> Result<AccountSnapshot, LedgerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.accounts
            .get(address)
            .cloned()
            .ok_or_else(|| LedgerError::AccountNotFound(address.to_string()))
    }
}

pub fn snapshot(bandwidth: i64, energy: i64, balance: i64) -> AccountSnapshot {
    AccountSnapshot {
        bandwidth: Some(bandwidth),
        energy: Some(energy),
        balance: Some(balance),
    }
}

pub async fn test_pool() -> SqlitePool {
    connection::establish_connection("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database")
}

/// Router wired to a fresh in-memory database and the given ledger.
pub async fn setup(ledger: Arc<StubLedger>) -> (Router, SqlitePool) {
    let pool = test_pool().await;
    let state = Arc::new(AppState::new(pool.clone(), ledger));
    (api::create_router(state), pool)
}
