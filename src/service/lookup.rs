use crate::db::lookup::insert_lookup;
use crate::ledger::{LedgerClient, LedgerError};
use crate::models::{AddressLookup, NewAddressLookup};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Error fetching Tron data: {0}")]
    LookupFailed(#[from] LedgerError),

    #[error("Error saving to database: {0}")]
    Store(#[from] sqlx::Error),
}

/// Fetch the current state of `address` from the ledger and record it.
///
/// Every successful call appends a new row, so repeated lookups of the same
/// address build up a history. Nothing is written when the ledger call fails.
pub async fn record_lookup(
    ledger: &dyn LedgerClient,
    pool: &SqlitePool,
    address: &str,
) -> Result<AddressLookup, LookupError> {
    let snapshot = ledger.fetch_account(address).await.map_err(|e| {
        warn!("Ledger lookup failed for {}: {}", address, e);
        LookupError::LookupFailed(e)
    })?;

    let lookup = NewAddressLookup {
        address: address.to_string(),
        bandwidth: snapshot.bandwidth.unwrap_or(0),
        energy: snapshot.energy.unwrap_or(0),
        balance: snapshot.balance.unwrap_or(0),
    };

    let record = insert_lookup(pool, &lookup).await.map_err(|e| {
        error!("Failed to store lookup for {}: {}", address, e);
        LookupError::Store(e)
    })?;

    info!(
        "Recorded lookup #{} for {}: bandwidth={}, energy={}, balance={}",
        record.id, record.address, record.bandwidth, record.energy, record.balance
    );

    Ok(record)
}
