// Stored lookup record and API request/response models

use chrono::NaiveDateTime;
use serde::Serialize;

/// One point-in-time observation of a Tron account, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct AddressLookup {
    pub id: i64,
    pub address: String,
    pub bandwidth: i64,
    pub energy: i64,
    /// Balance in SUN.
    pub balance: i64,
    pub created_at: NaiveDateTime,
}

/// Insert payload; `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAddressLookup {
    pub address: String,
    pub bandwidth: i64,
    pub energy: i64,
    pub balance: i64,
}

// POST /address_info/ response body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressInfo {
    pub address: String,
    pub bandwidth: i64,
    pub energy: i64,
    pub balance: i64,
}

impl From<&AddressLookup> for AddressInfo {
    fn from(record: &AddressLookup) -> Self {
        Self {
            address: record.address.clone(),
            bandwidth: record.bandwidth,
            energy: record.energy,
            balance: record.balance,
        }
    }
}
