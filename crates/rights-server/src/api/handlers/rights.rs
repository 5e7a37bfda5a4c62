//! Right derivation and transfer handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use rights_core::{ModelError, Right, RightData, RightsAssignment, User};

use crate::api::error::ApiError;
use crate::api::handlers::AppState;

/// Request to derive a new right from an existing one
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeriveRightRequest {
    pub right: Option<RightData>,
    pub source_right_id: Option<String>,
    pub current_holder: Option<User>,
}

/// Response carrying the derived right with its assigned persist-id
#[derive(Debug, Serialize)]
pub struct DeriveRightResponse {
    pub right: Right,
}

/// Derive a new Right from a source right
///
/// POST /rights
///
/// The source right id becomes the new right's `allowedBy` pointer;
/// its existence is not checked here (it is resolved lazily when the
/// right is later transferred).
pub async fn derive_right(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DeriveRightRequest>,
) -> Result<Json<DeriveRightResponse>, ApiError> {
    let right = request.right.ok_or(ModelError::MissingParameter("right"))?;
    let source_right_id = request
        .source_right_id
        .ok_or(ModelError::MissingParameter("sourceRightId"))?;
    let current_holder = request
        .current_holder
        .ok_or(ModelError::MissingParameter("currentHolder"))?;

    let right = state
        .engine
        .derive_right(right, &source_right_id, &current_holder)
        .await?;

    Ok(Json(DeriveRightResponse { right }))
}

/// Request to transfer a right between holders
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRightRequest {
    pub right_id: Option<String>,
    pub current_holder: Option<User>,
    pub to: Option<User>,
    /// Optional metadata attached to the assignment record
    pub rights_assignment: Option<serde_json::Value>,
}

/// Response carrying the recorded assignment
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRightResponse {
    pub rights_assignment: RightsAssignment,
}

/// Transfer a right to a new holder
///
/// POST /rights/transfer
///
/// The id may name either a plain Right or a Copyright. The caller
/// must be the current holder as recorded by the ledger.
pub async fn transfer_right(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TransferRightRequest>,
) -> Result<Json<TransferRightResponse>, ApiError> {
    let right_id = request
        .right_id
        .ok_or(ModelError::MissingParameter("rightId"))?;
    let current_holder = request
        .current_holder
        .ok_or(ModelError::MissingParameter("currentHolder"))?;
    let to = request.to.ok_or(ModelError::MissingParameter("to"))?;

    let rights_assignment = state
        .engine
        .transfer_right(&right_id, &current_holder, &to, request.rights_assignment)
        .await?;

    Ok(Json(TransferRightResponse { rights_assignment }))
}
