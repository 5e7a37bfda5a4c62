//! Manifestation registration handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use rights_core::{Copyright, Manifestation, ManifestationData, ModelError, User, Work, WorkData};

use crate::api::error::ApiError;
use crate::api::handlers::AppState;

/// Request to register a work/manifestation pair with its copyright
///
/// Top-level fields are optional so a missing one can be reported by
/// name instead of as an opaque deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateManifestationRequest {
    pub manifestation: Option<ManifestationData>,
    pub copyright_holder: Option<User>,
    pub work: Option<WorkData>,
}

/// The three linked records produced by registration
#[derive(Debug, Serialize)]
pub struct CreateManifestationResponse {
    pub work: Work,
    pub manifestation: Manifestation,
    pub copyright: Copyright,
}

/// Register a Work, Manifestation, and Copyright in one operation
///
/// POST /manifestations
pub async fn create_manifestation(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateManifestationRequest>,
) -> Result<Json<CreateManifestationResponse>, ApiError> {
    let manifestation = request
        .manifestation
        .ok_or(ModelError::MissingParameter("manifestation"))?;
    let copyright_holder = request
        .copyright_holder
        .ok_or(ModelError::MissingParameter("copyrightHolder"))?;
    let work = request.work.ok_or(ModelError::MissingParameter("work"))?;

    let (work, manifestation, copyright) = state
        .engine
        .register_manifestation(work, manifestation, &copyright_holder)
        .await?;

    Ok(Json(CreateManifestationResponse {
        work,
        manifestation,
        copyright,
    }))
}
