use crate::ledger::LedgerClient;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Dependencies shared by every request, built once at startup.
pub struct AppState {
    pub db_pool: SqlitePool,
    pub ledger: Arc<dyn LedgerClient>,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, ledger: Arc<dyn LedgerClient>) -> Self {
        Self { db_pool, ledger }
    }
}
