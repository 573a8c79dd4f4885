//! Plain-text asset cards.

use std::fmt::Write;

use luxury_core::asset::AssetDto;

/// Render one asset as a multi-line card.
///
/// ```text
/// [Watch] Patek Philippe Nautilus (2019)                Fundraising
///   Price per share: $85.5
///   Total shares:    1000
///   Remaining:       1000
/// ```
pub fn render_asset_card(asset: &AssetDto) -> String {
    let mut title = format!(
        "[{}] {} {}",
        asset.asset_type.label(),
        asset.brand,
        asset.model
    );
    if let Some(year) = asset.year {
        let _ = write!(title, " ({year})");
    }

    let mut card = format!("{title:<54}{}\n", asset.status.label());
    let _ = writeln!(card, "  Price per share: ${}", asset.price_per_share);
    let _ = writeln!(card, "  Total shares:    {}", asset.total_supply);
    let _ = writeln!(card, "  Remaining:       {}", asset.remaining_supply);
    let _ = writeln!(card, "  Id:              {}", asset.id);
    card
}

/// Render every asset, separated by blank lines.
pub fn render_asset_list(assets: &[AssetDto]) -> String {
    if assets.is_empty() {
        return "No assets available.\n".to_string();
    }
    assets
        .iter()
        .map(render_asset_card)
        .collect::<Vec<_>>()
        .join("\n")
}
