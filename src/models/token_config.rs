use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::EnumIter;

use crate::config::FORM;

/// Error types for configuration conversions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Only 18, 8, 6 and 0 decimals are offered
    UnsupportedDecimals(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnsupportedDecimals(d) => {
                write!(f, "Unsupported decimals: {} (expected 18, 8, 6 or 0)", d)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// The fixed set of decimal precisions the form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Decimals {
    #[default]
    Eighteen,
    Eight,
    Six,
    Zero,
}

impl Decimals {
    pub fn value(self) -> u8 {
        match self {
            Decimals::Eighteen => 18,
            Decimals::Eight => 8,
            Decimals::Six => 6,
            Decimals::Zero => 0,
        }
    }

    /// Label used in the decimals drop-down
    pub fn option_label(self) -> &'static str {
        match self {
            Decimals::Eighteen => "18 (standard)",
            Decimals::Eight => "8",
            Decimals::Six => "6 (USDC-like)",
            Decimals::Zero => "0",
        }
    }
}

impl fmt::Display for Decimals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl From<Decimals> for u8 {
    fn from(d: Decimals) -> Self {
        d.value()
    }
}

impl TryFrom<u8> for Decimals {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            18 => Ok(Decimals::Eighteen),
            8 => Ok(Decimals::Eight),
            6 => Ok(Decimals::Six),
            0 => Ok(Decimals::Zero),
            other => Err(ConfigError::UnsupportedDecimals(other)),
        }
    }
}

/// Optional token capabilities. Descriptive only: they change the preview,
/// never the deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Feature {
    Burnable,
    Mintable,
    Pausable,
}

impl Feature {
    pub fn label(self) -> &'static str {
        match self {
            Feature::Burnable => "Burnable",
            Feature::Mintable => "Mintable",
            Feature::Pausable => "Pausable",
        }
    }

    /// Short label used on the preview badges
    pub fn badge_label(self) -> &'static str {
        match self {
            Feature::Burnable => "Burn",
            Feature::Mintable => "Mint",
            Feature::Pausable => "Pause",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Feature::Burnable => "Tokens can be destroyed",
            Feature::Mintable => "New tokens can be created",
            Feature::Pausable => "Transfers can be paused",
        }
    }
}

/// A single field-scoped edit coming from the form.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigUpdate {
    Name(String),
    Symbol(String),
    Supply(String),
    Decimals(Decimals),
    Feature(Feature, bool),
}

/// The token the user is configuring.
///
/// Every setter coerces instead of rejecting, so a `TokenConfig` is always
/// displayable. Whether it can be deployed is a separate question, see
/// [`TokenConfig::is_deployable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub supply: String,
    pub decimals: Decimals,
    pub burnable: bool,
    pub mintable: bool,
    pub pausable: bool,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            symbol: String::new(),
            supply: FORM.default_supply.to_string(),
            decimals: Decimals::default(),
            burnable: false,
            mintable: false,
            pausable: false,
        }
    }
}

impl TokenConfig {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_symbol(&mut self, raw: &str) {
        self.symbol = normalize_symbol(raw);
    }

    pub fn set_supply(&mut self, raw: &str) {
        self.supply = filter_supply(raw);
    }

    pub fn set_decimals(&mut self, decimals: Decimals) {
        self.decimals = decimals;
    }

    pub fn set_feature(&mut self, feature: Feature, enabled: bool) {
        match feature {
            Feature::Burnable => self.burnable = enabled,
            Feature::Mintable => self.mintable = enabled,
            Feature::Pausable => self.pausable = enabled,
        }
    }

    pub fn feature(&self, feature: Feature) -> bool {
        match feature {
            Feature::Burnable => self.burnable,
            Feature::Mintable => self.mintable,
            Feature::Pausable => self.pausable,
        }
    }

    /// Applies one form edit. Only the named field changes.
    pub fn apply(&mut self, update: ConfigUpdate) {
        match update {
            ConfigUpdate::Name(name) => self.set_name(name),
            ConfigUpdate::Symbol(raw) => self.set_symbol(&raw),
            ConfigUpdate::Supply(raw) => self.set_supply(&raw),
            ConfigUpdate::Decimals(d) => self.set_decimals(d),
            ConfigUpdate::Feature(feature, enabled) => self.set_feature(feature, enabled),
        }
    }

    /// Name, symbol and supply must all be filled in.
    pub fn is_deployable(&self) -> bool {
        !self.name.is_empty() && !self.symbol.is_empty() && !self.supply.is_empty()
    }
}

/// Uppercases and truncates to the symbol length limit (in characters).
pub fn normalize_symbol(raw: &str) -> String {
    raw.to_uppercase().chars().take(FORM.symbol_max_len).collect()
}

/// Keeps ASCII digits only.
pub fn filter_supply(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}
