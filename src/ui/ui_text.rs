//! Every user-facing string in the GUI, in one place.

pub struct UiText {
    pub brand: &'static str,
    pub network_status: &'static str,
    pub hero_top: &'static str,
    pub hero_bottom: &'static str,
    pub hero_tagline: &'static str,
    pub footer: &'static str,

    pub form_heading: &'static str,
    pub name_label: &'static str,
    pub symbol_label: &'static str,
    pub decimals_label: &'static str,
    pub supply_label: &'static str,
    pub supply_suffix: &'static str,
    pub features_label: &'static str,
    pub deploy_button: &'static str,
    pub deploying_button: &'static str,
    pub deploy_footnote: &'static str,

    pub preview_heading: &'static str,
    pub supply_stat: &'static str,
    pub decimals_stat: &'static str,

    pub deployed_title: &'static str,
    pub deployed_live_suffix: &'static str,
    pub contract_address_label: &'static str,
    pub copy_button: &'static str,
    pub copied_ack: &'static str,
    pub explorer_link: &'static str,
    pub deploy_another: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    brand: "BASE FORGE",
    network_status: "● MAINNET",
    hero_top: "DEPLOY",
    hero_bottom: "YOUR TOKEN",
    hero_tagline: "Launch your ERC-20 token on Base chain in seconds. No coding required. Gas-optimized contracts.",
    footer: "Requested by @sat_org · Built by @clonkbot",

    form_heading: "Token Configuration",
    name_label: "Token Name",
    symbol_label: "Symbol",
    decimals_label: "Decimals",
    supply_label: "Total Supply",
    supply_suffix: "tokens",
    features_label: "Features",
    deploy_button: "DEPLOY TOKEN",
    deploying_button: "Deploying to Base...",
    deploy_footnote: "Gas fees apply. Connect wallet to deploy.",

    preview_heading: "Preview",
    supply_stat: "Supply",
    decimals_stat: "Decimals",

    deployed_title: "Token Deployed!",
    deployed_live_suffix: "is now live on",
    contract_address_label: "Contract Address",
    copy_button: "📋 Copy",
    copied_ack: "✔ Copied",
    explorer_link: "View on BaseScan ⬈",
    deploy_another: "Deploy Another Token",
};
