//! Token naming conventions for per-asset `LuxuryToken` contracts.

/// Decimals used by every `LuxuryToken`; one share is `10^18` base units.
pub const TOKEN_DECIMALS: u8 = 18;

/// Maximum length of a generated token symbol.
pub const MAX_SYMBOL_LEN: usize = 6;

/// Token name for an asset, e.g. `"Patek Philippe Nautilus Token"`.
pub fn token_name(brand: &str, model: &str) -> String {
    format!("{} {} Token", brand.trim(), model.trim())
}

/// Derive a ticker symbol from brand and model.
///
/// Takes the first letter of every brand word followed by the first letter
/// of the model, uppercased and capped at [`MAX_SYMBOL_LEN`] characters.
///
/// # Examples
///
/// ```
/// use luxury_core::token::token_symbol;
///
/// assert_eq!(token_symbol("Patek Philippe", "Nautilus 5711"), "PPN");
/// assert_eq!(token_symbol("Rolex", ""), "R");
/// ```
pub fn token_symbol(brand: &str, model: &str) -> String {
    let mut symbol: String = brand
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();

    if let Some(first) = model.trim().chars().next() {
        symbol.push(first);
    }

    symbol.to_uppercase().chars().take(MAX_SYMBOL_LEN).collect()
}
