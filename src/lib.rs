pub mod api;
pub mod config;
pub mod db;
pub mod ledger;
pub mod models;
pub mod service;
pub mod state;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export specific items for convenience
pub use db::connection;
pub use db::lookup;
pub use db::migration;
pub use models::{AddressInfo, AddressLookup, NewAddressLookup};
pub use validation::{validate_page, validate_tron_address};
pub use api::error::ApiError;
pub use api::route::{create_router, CreateLookupQuery, ListLookupsQuery};
pub use ledger::{AccountSnapshot, LedgerClient, LedgerError, TronClient};
pub use service::{record_lookup, LookupError};
