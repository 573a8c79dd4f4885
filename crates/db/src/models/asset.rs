//! Asset entity model and DTOs.

use chrono::NaiveDate;
use luxury_core::asset::{AssetDto, AssetStatus, AssetType};
use luxury_core::error::CoreError;
use luxury_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub asset_id_bytes32: String,
    pub token_address: Option<String>,
    pub asset_type: String,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub total_supply: Decimal,
    pub price_per_share: Decimal,
    pub metadata_hash: String,
    pub custody_info_hash: Option<String>,
    pub insurance_info_hash: Option<String>,
    pub status: String,
    pub submitted_by: Option<String>,
    pub description: Option<String>,
    pub purchase_price: Option<Decimal>,
    pub purchase_date: Option<NaiveDate>,
    pub serial_number: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Asset {
    /// Map to the public DTO.
    ///
    /// No share sales are tracked yet, so the remaining supply is the
    /// total supply.
    pub fn to_dto(&self) -> Result<AssetDto, CoreError> {
        let status: AssetStatus = self.status.parse().map_err(|_| {
            CoreError::Internal(format!(
                "Asset {} has unknown status '{}'",
                self.id, self.status
            ))
        })?;

        let total_supply = self.total_supply.normalize();

        Ok(AssetDto {
            id: self.id,
            asset_type: AssetType::from(self.asset_type.as_str()),
            brand: self.brand.clone(),
            model: self.model.clone(),
            year: self.year,
            price_per_share: self.price_per_share.normalize(),
            total_supply,
            remaining_supply: total_supply,
            status,
        })
    }
}

/// DTO for inserting a new asset. Only built after the token is deployed.
#[derive(Debug, Clone)]
pub struct NewAsset {
    pub asset_id_bytes32: String,
    pub token_address: Option<String>,
    pub asset_type: String,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub total_supply: Decimal,
    pub price_per_share: Decimal,
    pub metadata_hash: String,
    pub status: AssetStatus,
    pub submitted_by: Option<String>,
    pub description: Option<String>,
    pub purchase_price: Option<Decimal>,
    pub purchase_date: Option<NaiveDate>,
    pub serial_number: Option<String>,
}

/// Optional filters for listing assets (`?status=&assetType=&submittedBy=`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFilter {
    pub status: Option<AssetStatus>,
    pub asset_type: Option<String>,
    pub submitted_by: Option<String>,
}
