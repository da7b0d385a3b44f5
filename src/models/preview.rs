//! Everything the preview card and code snippet show, derived from a
//! [`TokenConfig`]. No state of its own: rebuild it whenever the config
//! changes.

use strum::IntoEnumIterator;

use crate::models::token_config::{Feature, TokenConfig};
use crate::utils::format_utils::{group_digits, strip_whitespace};

pub const PLACEHOLDER_INITIAL: char = '?';
pub const PLACEHOLDER_NAME: &str = "Token Name";
pub const PLACEHOLDER_SYMBOL: &str = "SYMBOL";
pub const PLACEHOLDER_CONTRACT: &str = "MyToken";
pub const CHAIN_LABEL: &str = "Base Chain";
pub const TOKEN_STANDARD: &str = "ERC-20";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureBadge {
    pub feature: Feature,
    pub active: bool,
}

impl FeatureBadge {
    pub fn label(&self) -> &'static str {
        self.feature.badge_label()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPreview {
    pub icon_initial: char,
    pub display_name: String,
    /// Already carries the leading `$`
    pub display_symbol: String,
    pub formatted_supply: String,
    pub decimals: u8,
    pub badges: Vec<FeatureBadge>,
    pub code_snippet: String,
}

impl TokenPreview {
    pub fn from_config(config: &TokenConfig) -> Self {
        let formatted_supply = group_digits(&config.supply);

        Self {
            icon_initial: config.symbol.chars().next().unwrap_or(PLACEHOLDER_INITIAL),
            display_name: non_empty_or(&config.name, PLACEHOLDER_NAME),
            display_symbol: format!("${}", non_empty_or(&config.symbol, PLACEHOLDER_SYMBOL)),
            badges: Feature::iter()
                .map(|feature| FeatureBadge {
                    feature,
                    active: config.feature(feature),
                })
                .collect(),
            decimals: config.decimals.value(),
            code_snippet: code_snippet(config, &formatted_supply),
            formatted_supply,
        }
    }

    pub fn active_badges(&self) -> impl Iterator<Item = &FeatureBadge> {
        self.badges.iter().filter(|b| b.active)
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Contract identifier: the name without whitespace, or a placeholder.
pub fn contract_name(config: &TokenConfig) -> String {
    let name = strip_whitespace(&config.name);
    if name.is_empty() {
        PLACEHOLDER_CONTRACT.to_string()
    } else {
        name
    }
}

// Solidity-flavoured summary. Mintable has no base contract clause.
fn code_snippet(config: &TokenConfig, formatted_supply: &str) -> String {
    let mut bases = vec!["ERC20"];
    if config.burnable {
        bases.push("ERC20Burnable");
    }
    if config.pausable {
        bases.push("Pausable");
    }

    format!(
        "contract {} is {} {{\n  // Total Supply: {}\n  // Decimals: {}\n}}",
        contract_name(config),
        bases.join(", "),
        formatted_supply,
        config.decimals,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::token_config::{ConfigUpdate, Decimals};

    fn test_coin() -> TokenConfig {
        let mut config = TokenConfig::default();
        config.apply(ConfigUpdate::Name("Test Coin".into()));
        config.apply(ConfigUpdate::Symbol("test".into()));
        config.apply(ConfigUpdate::Supply("abc123000".into()));
        config
    }

    #[test]
    fn empty_config_uses_placeholders() {
        let mut config = TokenConfig::default();
        config.set_supply("");
        let preview = TokenPreview::from_config(&config);

        assert_eq!(preview.icon_initial, '?');
        assert_eq!(preview.display_name, "Token Name");
        assert_eq!(preview.display_symbol, "$SYMBOL");
        assert_eq!(preview.formatted_supply, "0");
        assert_eq!(preview.decimals, 18);
        assert!(preview.code_snippet.starts_with("contract MyToken is ERC20 {"));
    }

    #[test]
    fn card_reflects_config() {
        let preview = TokenPreview::from_config(&test_coin());

        assert_eq!(preview.icon_initial, 'T');
        assert_eq!(preview.display_name, "Test Coin");
        assert_eq!(preview.display_symbol, "$TEST");
        assert_eq!(preview.formatted_supply, "123,000");
    }

    #[test]
    fn badges_follow_feature_flags() {
        let mut config = test_coin();
        config.set_feature(Feature::Mintable, true);
        let preview = TokenPreview::from_config(&config);

        let labels: Vec<_> = preview.badges.iter().map(|b| b.label()).collect();
        assert_eq!(labels, ["Burn", "Mint", "Pause"]);

        let active: Vec<_> = preview.active_badges().map(|b| b.feature).collect();
        assert_eq!(active, [Feature::Mintable]);
    }

    #[test]
    fn snippet_includes_only_enabled_clauses() {
        let mut config = test_coin();
        config.set_decimals(Decimals::Six);

        let plain = TokenPreview::from_config(&config).code_snippet;
        assert_eq!(
            plain,
            "contract TestCoin is ERC20 {\n  // Total Supply: 123,000\n  // Decimals: 6\n}"
        );

        config.set_feature(Feature::Burnable, true);
        config.set_feature(Feature::Pausable, true);
        config.set_feature(Feature::Mintable, true);
        let full = TokenPreview::from_config(&config).code_snippet;
        assert!(full.starts_with("contract TestCoin is ERC20, ERC20Burnable, Pausable {"));

        config.set_feature(Feature::Burnable, false);
        let pausable_only = TokenPreview::from_config(&config).code_snippet;
        assert!(pausable_only.starts_with("contract TestCoin is ERC20, Pausable {"));
        assert!(!pausable_only.contains("Burnable"));
    }

    #[test]
    fn whitespace_only_name_falls_back_in_snippet() {
        let mut config = test_coin();
        config.set_name("   ");
        assert_eq!(contract_name(&config), "MyToken");
        // The card still shows the raw name
        assert_eq!(TokenPreview::from_config(&config).display_name, "   ");
    }
}
