use bs58;
use thiserror::Error;

/// Version byte prefixed to every Tron mainnet address payload.
const TRON_ADDRESS_PREFIX: u8 = 0x41;
/// Prefix byte + 20-byte account hash + 4-byte checksum.
const TRON_ADDRESS_LEN: usize = 25;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid Tron address format: {0}")]
    InvalidTronAddress(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Hex form: `41` followed by the 20-byte account hash.
const TRON_HEX_ADDRESS_LEN: usize = 42;

/// Encoding a Tron address was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressForm {
    /// `T...` base58check, as shown by wallets and explorers.
    Base58,
    /// `41...` hex, as used by the node's raw API.
    Hex,
}

/// Shape check for Tron addresses in base58 or hex form. Checksum is left to
/// the node.
pub fn validate_tron_address(address: &str) -> Result<AddressForm, ValidationError> {
    // Check if address is empty
    if address.trim().is_empty() {
        return Err(ValidationError::MissingParameter("address".to_string()));
    }

    if address.len() == TRON_HEX_ADDRESS_LEN
        && address.starts_with("41")
        && address.chars().all(|c| c.is_ascii_hexdigit())
    {
        return Ok(AddressForm::Hex);
    }

    // Decode base58 string
    let decoded = match bs58::decode(address).into_vec() {
        Ok(bytes) => bytes,
        Err(_) => return Err(ValidationError::InvalidTronAddress(address.to_string())),
    };

    if decoded.len() != TRON_ADDRESS_LEN || decoded[0] != TRON_ADDRESS_PREFIX {
        return Err(ValidationError::InvalidTronAddress(address.to_string()));
    }

    Ok(AddressForm::Base58)
}

/// `page` must be an integer >= 1; absent means the first page.
pub fn validate_page(page: Option<&str>) -> Result<i64, ValidationError> {
    let Some(raw) = page else {
        return Ok(1);
    };

    let page = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidParameter(format!("page must be an integer, got '{}'", raw)))?;

    if page < 1 {
        return Err(ValidationError::InvalidParameter(
            "page must be greater than or equal to 1".to_string()
        ));
    }

    Ok(page)
}
