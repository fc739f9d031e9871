#[cfg(test)]
mod tests {
    use crate::{
        db::lookup::{count_lookups, list_recent},
        ledger::AccountSnapshot,
        service::{record_lookup, LookupError},
        tests::{snapshot, test_pool, StubLedger, ADDRESS_1, USDT_CONTRACT},
    };

    #[tokio::test]
    async fn test_record_lookup_persists_snapshot() {
        let pool = test_pool().await;
        let ledger = StubLedger::default().with_account(USDT_CONTRACT, snapshot(100, 50, 1000));

        let record = record_lookup(&ledger, &pool, USDT_CONTRACT).await.unwrap();

        assert_eq!(record.address, USDT_CONTRACT);
        assert_eq!((record.bandwidth, record.energy, record.balance), (100, 50, 1000));

        let stored = list_recent(&pool, 1, 10).await.unwrap();
        assert_eq!(stored, vec![record]);
        assert_eq!(ledger.calls(), 1);
    }

    #[tokio::test]
    async fn test_missing_metrics_default_to_zero() {
        let pool = test_pool().await;
        let ledger = StubLedger::default().with_account(
            ADDRESS_1,
            AccountSnapshot { bandwidth: None, energy: None, balance: Some(7) },
        );

        let record = record_lookup(&ledger, &pool, ADDRESS_1).await.unwrap();

        assert_eq!(record.bandwidth, 0);
        assert_eq!(record.energy, 0);
        assert_eq!(record.balance, 7);
    }

    #[tokio::test]
    async fn test_ledger_failure_writes_nothing() {
        let pool = test_pool().await;
        let ledger = StubLedger::default();

        let err = record_lookup(&ledger, &pool, "bad").await.unwrap_err();

        assert!(matches!(err, LookupError::LookupFailed(_)));
        assert!(err.to_string().starts_with("Error fetching Tron data: "));
        assert_eq!(count_lookups(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_repeated_lookups_append_history() {
        let pool = test_pool().await;
        let ledger = StubLedger::default().with_account(ADDRESS_1, snapshot(1, 2, 3));

        let first = record_lookup(&ledger, &pool, ADDRESS_1).await.unwrap();
        let second = record_lookup(&ledger, &pool, ADDRESS_1).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(count_lookups(&pool).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_store_failure_after_successful_fetch() {
        let pool = test_pool().await;
        let ledger = StubLedger::default().with_account(ADDRESS_1, snapshot(1, 2, 3));
        pool.close().await;

        let err = record_lookup(&ledger, &pool, ADDRESS_1).await.unwrap_err();

        assert!(matches!(err, LookupError::Store(_)));
        assert!(err.to_string().starts_with("Error saving to database: "));
        // The ledger is always consulted before the write is attempted
        assert_eq!(ledger.calls(), 1);
    }
}
