// Manual smoke test against a live Tron node:
//   cargo run --bin test_ledger -- <address>
use tron_address_service::{
    config::Config,
    db::{connection, lookup},
    ledger::{LedgerClient, TronClient},
    service::record_lookup,
};
use tracing::{error, info, Level};

const DEFAULT_ADDRESS: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let address = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
    info!("Starting ledger smoke test for {}", address);

    // 1. Setup against a throwaway database
    let config = Config::from_env();
    let client = TronClient::new(&config)?;
    let db_pool = connection::establish_connection("sqlite::memory:").await?;

    // 2. Raw account fetch
    match client.fetch_account(&address).await {
        Ok(snapshot) => {
            info!("✅ Account fetched from {}", client.base_url());
            info!("   Bandwidth: {:?}", snapshot.bandwidth);
            info!("   Energy: {:?}", snapshot.energy);
            info!("   Balance (SUN): {:?}", snapshot.balance);
        }
        Err(e) => {
            error!("❌ Failed to fetch account: {}", e);
            return Err(e.into());
        }
    }

    // 3. Full lookup flow, fetch + store
    let record = record_lookup(&client, &db_pool, &address).await?;
    info!("✅ Stored lookup #{} at {}", record.id, record.created_at);

    let recent = lookup::list_recent(&db_pool, 1, 10).await?;
    info!("✅ {} lookup(s) in database", recent.len());

    info!("Ledger smoke test completed successfully!");
    Ok(())
}
