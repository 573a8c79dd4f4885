//! Asset submission request, validation and metadata hashing.
//!
//! A submission becomes an asset only after its token is deployed; the
//! checks here run before any chain call is made.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::asset::AssetType;
use crate::bytes32::Bytes32Hex;
use crate::error::CoreError;
use crate::hashing::sha256_bytes;

/// Submitter recorded when the form leaves the field blank.
pub const ANONYMOUS_SUBMITTER: &str = "anonymous";

/// Earliest accepted manufacturing year.
pub const MIN_YEAR: i32 = 1900;

/// Column widths of the `assets` table.
pub const MAX_ASSET_TYPE_LEN: usize = 50;
pub const MAX_BRAND_LEN: usize = 100;
pub const MAX_MODEL_LEN: usize = 100;
pub const MAX_SERIAL_NUMBER_LEN: usize = 200;
pub const MAX_SUBMITTED_BY_LEN: usize = 100;

/// Decimal places held by the `NUMERIC(36, 18)` amount columns.
pub const MAX_AMOUNT_SCALE: u32 = 18;

/// Integer digits held by the `NUMERIC(36, 18)` amount columns.
pub const MAX_AMOUNT_INTEGER_DIGITS: u32 = 18;

/// Body of `POST /api/assets/submit`.
///
/// Decimal fields are sent as JSON numbers and accepted as numbers or
/// strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSubmitRequest {
    pub asset_type: AssetType,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::float_option::serialize"
    )]
    pub purchase_price: Option<Decimal>,
    pub purchase_date: Option<NaiveDate>,
    pub serial_number: Option<String>,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::float_option::serialize"
    )]
    pub total_supply: Option<Decimal>,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::float_option::serialize"
    )]
    pub price_per_share: Option<Decimal>,
    pub submitted_by: Option<String>,
}

/// Descriptive fields covered by an asset's `metadataHash`.
///
/// Field order is fixed, so the JSON encoding is canonical.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMetadata<'a> {
    pub asset_id: &'a Bytes32Hex,
    pub asset_type: &'a str,
    pub brand: &'a str,
    pub model: &'a str,
    pub year: Option<i32>,
    pub description: Option<&'a str>,
    pub purchase_price: Option<Decimal>,
    pub purchase_date: Option<NaiveDate>,
    pub serial_number: Option<&'a str>,
}

impl<'a> AssetMetadata<'a> {
    pub fn from_request(asset_id: &'a Bytes32Hex, input: &'a AssetSubmitRequest) -> Self {
        Self {
            asset_id,
            asset_type: input.asset_type.as_str(),
            brand: &input.brand,
            model: &input.model,
            year: input.year,
            description: input.description.as_deref(),
            purchase_price: input.purchase_price,
            purchase_date: input.purchase_date,
            serial_number: input.serial_number.as_deref(),
        }
    }
}

/// SHA-256 of the canonical JSON metadata, as a `bytes32` value.
pub fn metadata_hash(metadata: &AssetMetadata<'_>) -> Result<Bytes32Hex, CoreError> {
    let encoded = serde_json::to_vec(metadata)
        .map_err(|e| CoreError::Internal(format!("Failed to encode asset metadata: {e}")))?;
    Ok(Bytes32Hex::from_bytes(sha256_bytes(&encoded)))
}

/// Validate a submission before any token is deployed.
pub fn validate_submission(input: &AssetSubmitRequest, current_year: i32) -> Result<(), CoreError> {
    let asset_type = input.asset_type.as_str();
    if asset_type.trim().is_empty() {
        return Err(CoreError::Validation("assetType is required".into()));
    }
    check_len("assetType", asset_type, MAX_ASSET_TYPE_LEN)?;

    require_text("brand", &input.brand, MAX_BRAND_LEN)?;
    require_text("model", &input.model, MAX_MODEL_LEN)?;

    if let Some(year) = input.year {
        if !(MIN_YEAR..=current_year).contains(&year) {
            return Err(CoreError::Validation(format!(
                "year must be between {MIN_YEAR} and {current_year}, got {year}"
            )));
        }
    }

    if let Some(serial) = &input.serial_number {
        check_len("serialNumber", serial, MAX_SERIAL_NUMBER_LEN)?;
    }
    if let Some(submitter) = &input.submitted_by {
        check_len("submittedBy", submitter, MAX_SUBMITTED_BY_LEN)?;
    }

    let total_supply = input
        .total_supply
        .ok_or_else(|| CoreError::Validation("totalSupply is required".into()))?;
    if total_supply <= Decimal::ZERO || !total_supply.fract().is_zero() {
        return Err(CoreError::Validation(format!(
            "totalSupply must be a positive whole number of shares, got {total_supply}"
        )));
    }
    check_amount("totalSupply", total_supply)?;

    let price_per_share = input
        .price_per_share
        .ok_or_else(|| CoreError::Validation("pricePerShare is required".into()))?;
    if price_per_share.is_sign_negative() {
        return Err(CoreError::Validation(format!(
            "pricePerShare must not be negative, got {price_per_share}"
        )));
    }
    check_amount("pricePerShare", price_per_share)?;

    if let Some(price) = input.purchase_price {
        if price.is_sign_negative() {
            return Err(CoreError::Validation(format!(
                "purchasePrice must not be negative, got {price}"
            )));
        }
        check_amount("purchasePrice", price)?;
    }

    Ok(())
}

fn require_text(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    check_len(field, value, max)
}

/// Amounts must fit the amount columns without rounding.
fn check_amount(field: &str, value: Decimal) -> Result<(), CoreError> {
    let limit = Decimal::from(10u64.pow(MAX_AMOUNT_INTEGER_DIGITS));
    if value.trunc().abs() >= limit {
        return Err(CoreError::Validation(format!(
            "{field} must have at most {MAX_AMOUNT_INTEGER_DIGITS} integer digits, got {value}"
        )));
    }
    if value.normalize().scale() > MAX_AMOUNT_SCALE {
        return Err(CoreError::Validation(format!(
            "{field} must have at most {MAX_AMOUNT_SCALE} decimal places, got {value}"
        )));
    }
    Ok(())
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters, got {len}"
        )));
    }
    Ok(())
}
