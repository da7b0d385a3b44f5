//! Simulated deployment knobs.
//!
//! Nothing here talks to a chain. The delay and the address shape only
//! exist so the confirmation flow looks like the real thing.

/// Shape of the synthetic contract address
pub struct AddressShape {
    /// Prefix written before the hex body
    pub prefix: &'static str,
    /// Number of hex characters after the prefix
    pub hex_len: usize,
    /// Characters drawn (uniformly) for every position
    pub alphabet: &'static [u8],
}

/// The Master Deploy Configuration
pub struct DeployConfig {
    /// How long the simulated deployment "waits for the chain"
    pub delay_ms: u64,
    pub address: AddressShape,
    /// Block explorer page for a token, address is appended
    pub explorer_token_url: &'static str,
    /// Network name shown in the confirmation text
    pub network_name: &'static str,
    /// How long the "Copied" acknowledgement stays up
    pub copied_ack_ms: u64,
}

pub const DEPLOY: DeployConfig = DeployConfig {
    delay_ms: 3_000,

    address: AddressShape {
        prefix: "0x",
        hex_len: 40,
        alphabet: b"0123456789abcdef",
    },

    explorer_token_url: "https://basescan.org/token/",
    network_name: "Base",
    copied_ack_ms: 2_000,
};
