use crate::config::Config;
use crate::ledger::{AccountSnapshot, LedgerClient};
use crate::validation::{validate_tron_address, AddressForm};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, info, warn};

// TronGrid expects TRON-PRO-API-KEY; header names are case-insensitive
const API_KEY_HEADER: &str = "tron-pro-api-key";

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Request to Tron node failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Tron node returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response from Tron node: {0}")]
    Decode(String),

    #[error("Tron node rejected request: {0}")]
    Rejected(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Failed to build HTTP client: {0}")]
    Setup(String),
}

/// HTTP adapter for a TronGrid-compatible full node.
pub struct TronClient {
    http: reqwest::Client,
    base_url: String,
}

impl TronClient {
    pub fn new(config: &Config) -> Result<Self, LedgerError> {
        let base_url = config.tron_api_url.trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        if let Some(key) = &config.tron_api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| LedgerError::Setup(format!("invalid API key: {}", e)))?;
            headers.insert(API_KEY_HEADER, value);
        }

        info!(
            "Initializing Tron client with endpoint: {}, timeout: {:?}, api key: {}",
            base_url,
            config.ledger_timeout,
            config.tron_api_key.is_some()
        );

        let http = reqwest::Client::builder()
            .timeout(config.ledger_timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| LedgerError::Setup(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl LedgerClient for TronClient {
    async fn fetch_account(&self, address: &str) -> Result<AccountSnapshot, LedgerError> {
        let form = validate_tron_address(address)
            .map_err(|e| LedgerError::InvalidAddress(e.to_string()))?;

        let url = format!("{}/wallet/getaccount", self.base_url);
        debug!("Fetching account {} ({:?}) from {}", address, form, url);

        let response = self
            .http
            .post(&url)
            .json(&account_request(address, form))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Tron node answered {} for account {}", status, address);
            return Err(LedgerError::Status { status: status.as_u16(), body });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| LedgerError::Decode(e.to_string()))?;

        parse_account(address, &body)
    }
}

/// `visible` tells the node whether the address is base58 or hex.
pub fn account_request(address: &str, form: AddressForm) -> Value {
    json!({ "address": address, "visible": form == AddressForm::Base58 })
}

/// Turn a `/wallet/getaccount` body into a snapshot.
///
/// The node answers `{}` for accounts that were never activated and
/// `{"Error": "..."}` for requests it cannot serve.
pub fn parse_account(address: &str, body: &Value) -> Result<AccountSnapshot, LedgerError> {
    let account = body
        .as_object()
        .ok_or_else(|| LedgerError::Decode(format!("expected a JSON object, got {}", body)))?;

    if let Some(error) = account.get("Error") {
        let message = error.as_str().map(str::to_string).unwrap_or_else(|| error.to_string());
        return Err(LedgerError::Rejected(message));
    }

    if account.is_empty() {
        return Err(LedgerError::AccountNotFound(address.to_string()));
    }

    Ok(AccountSnapshot {
        bandwidth: account.get("bandwidth").and_then(Value::as_i64),
        energy: account.get("energy").and_then(Value::as_i64),
        balance: account.get("balance").and_then(Value::as_i64),
    })
}
