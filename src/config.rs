// Runtime configuration for:
// - Database connection string
// - Server listening address/port
// - Tron full-node endpoint, API key and request timeout

use dotenv::dotenv;
use std::env;
use std::time::Duration;

/// Number of lookups returned per page by the list endpoint.
pub const PAGINATION_SIZE: i64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub tron_api_url: String,
    pub tron_api_key: Option<String>,
    pub ledger_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:tron_info.db".to_string());
        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .unwrap_or(8000);
        let tron_api_url = env::var("TRON_API_URL")
            .unwrap_or_else(|_| "https://api.trongrid.io".to_string());
        let tron_api_key = env::var("TRON_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let ledger_timeout = env::var("LEDGER_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        Self {
            database_url,
            server_host,
            server_port,
            tron_api_url,
            tron_api_key,
            ledger_timeout,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:tron_info.db".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 8000,
            tron_api_url: "https://api.trongrid.io".to_string(),
            tron_api_key: None,
            ledger_timeout: Duration::from_secs(30),
        }
    }
}
