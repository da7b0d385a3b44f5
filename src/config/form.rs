//! Token form defaults and input limits.

pub struct FormConfig {
    /// Symbols are truncated to this many characters on entry
    pub symbol_max_len: usize,
    /// Supply the form starts with
    pub default_supply: &'static str,
    pub name_placeholder: &'static str,
    pub symbol_placeholder: &'static str,
    pub supply_placeholder: &'static str,
}

pub const FORM: FormConfig = FormConfig {
    symbol_max_len: 8,
    default_supply: "1000000",
    name_placeholder: "My Awesome Token",
    symbol_placeholder: "MTK",
    supply_placeholder: "1000000",
};
