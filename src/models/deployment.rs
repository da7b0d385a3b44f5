use serde::Serialize;
use std::fmt;
use std::time::Duration;

use crate::config::DEPLOY;

/// Reasons a string is not a contract address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    MissingPrefix,
    /// Length of the hex body that was found
    WrongLength(usize),
    InvalidCharacter(char),
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::MissingPrefix => {
                write!(f, "Address must start with {}", DEPLOY.address.prefix)
            }
            AddressError::WrongLength(len) => write!(
                f,
                "Address must have {} hex characters, found {}",
                DEPLOY.address.hex_len, len
            ),
            AddressError::InvalidCharacter(c) => {
                write!(f, "Invalid character in address: {:?}", c)
            }
        }
    }
}

impl std::error::Error for AddressError {}

/// `0x` followed by 40 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContractAddress(String);

impl ContractAddress {
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let body = raw
            .strip_prefix(DEPLOY.address.prefix)
            .ok_or(AddressError::MissingPrefix)?;

        if let Some(bad) = body
            .chars()
            .find(|c| !c.is_ascii() || !DEPLOY.address.alphabet.contains(&(*c as u8)))
        {
            return Err(AddressError::InvalidCharacter(bad));
        }

        if body.len() != DEPLOY.address.hex_len {
            return Err(AddressError::WrongLength(body.len()));
        }

        Ok(Self(raw.to_string()))
    }

    /// Builds an address from a hex body the caller already drew from the
    /// address alphabet.
    pub(crate) fn from_hex_body(body: &str) -> Self {
        debug_assert_eq!(body.len(), DEPLOY.address.hex_len);
        Self(format!("{}{}", DEPLOY.address.prefix, body))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn explorer_url(&self) -> String {
        format!("{}{}", DEPLOY.explorer_token_url, self.0)
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the confirmation view shows. Lives until dismissed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentResult {
    pub address: ContractAddress,
    /// Name as it was when deploy was pressed
    pub token_name: String,
    #[serde(serialize_with = "serialize_elapsed_ms", rename = "elapsed_ms")]
    pub elapsed: Duration,
}

fn serialize_elapsed_ms<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "0x00112233445566778899aabbccddeeff00112233";

    #[test]
    fn parses_well_formed_address() {
        let addr = ContractAddress::parse(GOOD).unwrap();
        assert_eq!(addr.as_str(), GOOD);
        assert_eq!(addr.to_string().len(), 42);
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert_eq!(
            ContractAddress::parse("00112233445566778899aabbccddeeff00112233"),
            Err(AddressError::MissingPrefix)
        );
        assert_eq!(
            ContractAddress::parse("0xabc"),
            Err(AddressError::WrongLength(3))
        );
        assert_eq!(
            ContractAddress::parse("0x00112233445566778899AABBCCDDEEFF00112233"),
            Err(AddressError::InvalidCharacter('A'))
        );
    }

    #[test]
    fn explorer_url_appends_address() {
        let addr = ContractAddress::parse(GOOD).unwrap();
        assert_eq!(
            addr.explorer_url(),
            format!("https://basescan.org/token/{}", GOOD)
        );
    }

    #[test]
    fn result_serializes_flat() {
        let result = DeploymentResult {
            address: ContractAddress::parse(GOOD).unwrap(),
            token_name: "Test Coin".to_string(),
            elapsed: Duration::from_millis(3_000),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["address"], GOOD);
        assert_eq!(json["token_name"], "Test Coin");
        assert_eq!(json["elapsed_ms"], 3_000);
    }
}
