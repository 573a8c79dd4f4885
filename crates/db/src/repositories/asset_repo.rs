//! Repository for the `assets` table.

use luxury_core::asset::AssetStatus;
use luxury_core::types::DbId;
use sqlx::PgPool;

use crate::models::asset::{Asset, AssetFilter, NewAsset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, asset_id_bytes32, token_address, asset_type, brand, model, year, \
    total_supply, price_per_share, metadata_hash, custody_info_hash, insurance_info_hash, \
    status, submitted_by, description, purchase_price, purchase_date, serial_number, \
    created_at, updated_at";

/// Provides CRUD operations for tokenized assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewAsset) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets \
                (asset_id_bytes32, token_address, asset_type, brand, model, year, \
                 total_supply, price_per_share, metadata_hash, status, submitted_by, \
                 description, purchase_price, purchase_date, serial_number) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&input.asset_id_bytes32)
            .bind(&input.token_address)
            .bind(&input.asset_type)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(input.year)
            .bind(input.total_supply)
            .bind(input.price_per_share)
            .bind(&input.metadata_hash)
            .bind(input.status.as_str())
            .bind(&input.submitted_by)
            .bind(&input.description)
            .bind(input.purchase_price)
            .bind(input.purchase_date)
            .bind(&input.serial_number)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an asset by its on-chain `bytes32` identifier.
    pub async fn find_by_asset_id_bytes32(
        pool: &PgPool,
        asset_id_bytes32: &str,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE asset_id_bytes32 = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(asset_id_bytes32)
            .fetch_optional(pool)
            .await
    }

    /// List all assets, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Asset>, sqlx::Error> {
        Self::search(pool, &AssetFilter::default()).await
    }

    /// List assets in the given lifecycle status.
    pub async fn list_by_status(
        pool: &PgPool,
        status: AssetStatus,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let filter = AssetFilter {
            status: Some(status),
            ..AssetFilter::default()
        };
        Self::search(pool, &filter).await
    }

    /// List assets of the given type (`watch`, `jewelry`, ...).
    pub async fn list_by_asset_type(
        pool: &PgPool,
        asset_type: &str,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let filter = AssetFilter {
            asset_type: Some(asset_type.to_string()),
            ..AssetFilter::default()
        };
        Self::search(pool, &filter).await
    }

    /// List assets submitted by a wallet address or user id.
    pub async fn list_by_submitted_by(
        pool: &PgPool,
        submitted_by: &str,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let filter = AssetFilter {
            submitted_by: Some(submitted_by.to_string()),
            ..AssetFilter::default()
        };
        Self::search(pool, &filter).await
    }

    /// List assets matching every provided filter, newest first.
    pub async fn search(pool: &PgPool, filter: &AssetFilter) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assets \
             WHERE ($1::text IS NULL OR status = $1) \
               AND ($2::text IS NULL OR asset_type = $2) \
               AND ($3::text IS NULL OR submitted_by = $3) \
             ORDER BY created_at DESC, id"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(filter.status.map(AssetStatus::as_str))
            .bind(&filter.asset_type)
            .bind(&filter.submitted_by)
            .fetch_all(pool)
            .await
    }

    /// Move an asset to a new lifecycle status.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: AssetStatus,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("UPDATE assets SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }
}
