//! Handlers for tokenized assets.
//!
//! Listing and detail return the public [`AssetDto`] shape; submission runs
//! the deploy-then-persist flow in [`crate::submission`].

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Datelike;
use luxury_core::asset::AssetDto;
use luxury_core::error::CoreError;
use luxury_core::submission::AssetSubmitRequest;
use luxury_core::types::DbId;
use luxury_db::models::asset::AssetFilter;
use luxury_db::repositories::AssetRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::submission;

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// GET /api/assets
///
/// List assets, newest first, with optional `status`, `assetType` and
/// `submittedBy` filters. The body is a bare JSON array.
pub async fn list_assets(
    State(state): State<AppState>,
    Query(filter): Query<AssetFilter>,
) -> AppResult<Json<Vec<AssetDto>>> {
    let assets = AssetRepo::search(&state.pool, &filter).await?;

    let dtos = assets
        .iter()
        .map(|asset| asset.to_dto())
        .collect::<Result<Vec<_>, CoreError>>()?;

    Ok(Json(dtos))
}

/// GET /api/assets/{id}
///
/// An id that is not a UUID is a 400 in the usual error body.
pub async fn get_asset(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<AssetDto>> {
    let Path(id) = id.map_err(|e| {
        AppError::Core(CoreError::Validation(format!(
            "Invalid asset id: {}",
            e.body_text()
        )))
    })?;

    let asset = AssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id,
        }))?;

    Ok(Json(asset.to_dto()?))
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// POST /api/assets/submit
///
/// Validate, deploy the asset's token, then persist. Responds 201 with the
/// new asset, or 400 when the body is malformed, validation fails or the
/// deployment fails.
pub async fn submit_asset(
    State(state): State<AppState>,
    payload: Result<Json<AssetSubmitRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|e| AppError::SubmissionFailed(e.body_text()))?;

    let asset = submission::submit_asset(
        &state.pool,
        state.deployer.as_ref(),
        input,
        chrono::Utc::now().year(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(asset.to_dto()?)))
}
