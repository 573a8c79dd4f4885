//! Asset submission flow.
//!
//! A submission is validated, gets a fresh `bytes32` asset id and metadata
//! hash, and has its `LuxuryToken` deployed. The asset row is written only
//! after the deployment is confirmed, so a failed deployment leaves no
//! trace in the database.

use luxury_chain::{initial_supply_units, DeployParams, TokenDeployer};
use luxury_core::asset::{AssetStatus, AssetType};
use luxury_core::bytes32::new_asset_id;
use luxury_core::error::CoreError;
use luxury_core::submission::{
    metadata_hash, validate_submission, AssetMetadata, AssetSubmitRequest, ANONYMOUS_SUBMITTER,
};
use luxury_core::token::{token_name, token_symbol};
use luxury_db::models::asset::{Asset, NewAsset};
use luxury_db::repositories::AssetRepo;
use luxury_db::DbPool;

use crate::error::{AppError, AppResult};

/// Run the full submission flow and return the persisted asset.
pub async fn submit_asset(
    pool: &DbPool,
    deployer: &dyn TokenDeployer,
    input: AssetSubmitRequest,
    current_year: i32,
) -> AppResult<Asset> {
    let input = normalize(input);
    validate_submission(&input, current_year).map_err(rejected)?;

    let (Some(total_supply), Some(price_per_share)) = (input.total_supply, input.price_per_share)
    else {
        return Err(AppError::InternalError(
            "validated submission is missing supply or price".into(),
        ));
    };

    let asset_id = new_asset_id();
    let metadata_hash = metadata_hash(&AssetMetadata::from_request(&asset_id, &input))?;

    let params = DeployParams {
        name: token_name(&input.brand, &input.model),
        symbol: token_symbol(&input.brand, &input.model),
        asset_id: asset_id.clone(),
        metadata_hash: metadata_hash.clone(),
        initial_supply: initial_supply_units(total_supply)?,
        owner: Some(deployer.deployer_address()),
    };

    let deployed = deployer.deploy(&params).await?;

    let new_asset = NewAsset {
        asset_id_bytes32: asset_id.to_string(),
        token_address: Some(deployed.address.to_string()),
        asset_type: input.asset_type.as_str().to_string(),
        brand: input.brand,
        model: input.model,
        year: input.year,
        total_supply,
        price_per_share,
        metadata_hash: metadata_hash.to_string(),
        status: AssetStatus::Fundraising,
        submitted_by: input.submitted_by,
        description: input.description,
        purchase_price: input.purchase_price,
        purchase_date: input.purchase_date,
        serial_number: input.serial_number,
    };

    let asset = AssetRepo::create(pool, &new_asset).await?;

    tracing::info!(
        id = %asset.id,
        asset_id = %asset.asset_id_bytes32,
        token_address = %deployed.address,
        tx_hash = ?deployed.tx_hash,
        "Asset submitted and tokenized",
    );

    Ok(asset)
}

/// Trim text fields, turn blank optional strings into `None` and default
/// the submitter.
fn normalize(mut input: AssetSubmitRequest) -> AssetSubmitRequest {
    input.asset_type = AssetType::from(input.asset_type.as_str().trim());
    input.brand = input.brand.trim().to_string();
    input.model = input.model.trim().to_string();
    input.description = non_blank(input.description);
    input.serial_number = non_blank(input.serial_number);
    input.submitted_by =
        non_blank(input.submitted_by).or_else(|| Some(ANONYMOUS_SUBMITTER.to_string()));
    input
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn rejected(err: CoreError) -> AppError {
    match err {
        CoreError::Validation(msg) => AppError::SubmissionFailed(msg),
        other => AppError::Core(other),
    }
}
