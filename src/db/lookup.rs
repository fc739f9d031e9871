use sqlx::{Pool, Sqlite};
use crate::models::{AddressLookup, NewAddressLookup};

/// Store one lookup and return it with its assigned `id` and `created_at`.
///
/// The insert runs in its own transaction; if anything fails before commit the
/// transaction is dropped and rolled back, so no partial row is ever visible.
pub async fn insert_lookup(pool: &Pool<Sqlite>, lookup: &NewAddressLookup) -> Result<AddressLookup, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let record = sqlx::query_as::<_, AddressLookup>(
        r#"
        INSERT INTO tron_address_info (address, bandwidth, energy, balance)
        VALUES (?, ?, ?, ?)
        RETURNING id, address, bandwidth, energy, balance, created_at
        "#
    )
    .bind(&lookup.address)
    .bind(lookup.bandwidth)
    .bind(lookup.energy)
    .bind(lookup.balance)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(record)
}

/// Most recent lookups first, `page` is 1-based.
///
/// Rows sharing a `created_at` value are ordered by `id`, newest first. A page
/// past the end of the data yields an empty vector.
pub async fn list_recent(
    pool: &Pool<Sqlite>,
    page: i64,
    page_size: i64,
) -> Result<Vec<AddressLookup>, sqlx::Error> {
    // Pages whose offset does not fit in an i64 are necessarily past the data
    let Some(offset) = (page - 1).max(0).checked_mul(page_size) else {
        return Ok(Vec::new());
    };

    sqlx::query_as::<_, AddressLookup>(
        r#"SELECT id, address, bandwidth, energy, balance, created_at
           FROM tron_address_info
           ORDER BY created_at DESC, id DESC
           LIMIT ? OFFSET ?"#
    )
    .bind(page_size)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn count_lookups(pool: &Pool<Sqlite>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM tron_address_info")
        .fetch_one(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::establish_connection;

    fn lookup(address: &str, balance: i64) -> NewAddressLookup {
        NewAddressLookup {
            address: address.to_string(),
            bandwidth: 0,
            energy: 0,
            balance,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let pool = establish_connection("sqlite::memory:").await.unwrap();

        let first = insert_lookup(&pool, &lookup("TPL6W6Z4R7fKxe8f5zaog9kYk1L5qiuxgQ", 1000)).await.unwrap();
        let second = insert_lookup(&pool, &lookup("TPL6W6Z4R7fKxe8f5zaog9kYk1L5qiuxgQ", 1000)).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.balance, 1000);
        assert!(second.created_at >= first.created_at);
    }

    #[tokio::test]
    async fn test_ties_on_created_at_fall_back_to_id() {
        let pool = establish_connection("sqlite::memory:").await.unwrap();

        for i in 0..3 {
            sqlx::query("INSERT INTO tron_address_info (address, created_at) VALUES (?, '2024-01-01 00:00:00.000')")
                .bind(format!("addr_{}", i))
                .execute(&pool)
                .await
                .unwrap();
        }

        let records = list_recent(&pool, 1, 10).await.unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_page_far_past_the_data_is_empty() {
        let pool = establish_connection("sqlite::memory:").await.unwrap();
        insert_lookup(&pool, &lookup("TBWagnyV6FwR5mcjvZx24dF3B2KBkYYonv", 1)).await.unwrap();

        assert_eq!(list_recent(&pool, 1, 10).await.unwrap().len(), 1);
        assert!(list_recent(&pool, 2, 10).await.unwrap().is_empty());
        assert!(list_recent(&pool, i64::MAX / 10 + 2, 10).await.unwrap().is_empty());
        assert!(list_recent(&pool, i64::MAX, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_count_lookups() {
        let pool = establish_connection("sqlite::memory:").await.unwrap();
        assert_eq!(count_lookups(&pool).await.unwrap(), 0);

        insert_lookup(&pool, &lookup("TBWagnyV6FwR5mcjvZx24dF3B2KBkYYonv", 1)).await.unwrap();
        assert_eq!(count_lookups(&pool).await.unwrap(), 1);
    }
}
