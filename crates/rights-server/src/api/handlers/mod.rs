//! API request handlers

pub mod manifestations;
pub mod rights;
pub mod users;

pub use manifestations::{
    create_manifestation, CreateManifestationRequest, CreateManifestationResponse,
};
pub use rights::{
    derive_right, transfer_right, DeriveRightRequest, DeriveRightResponse, TransferRightRequest,
    TransferRightResponse,
};
pub use users::create_user;

use crate::engine::LifecycleEngine;

/// Application state shared across handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// The lifecycle engine, holding the ledger handle
    pub engine: LifecycleEngine,
}
