//! User creation handler

use axum::Json;
use tracing::info;

use rights_core::{Identity, User};

/// Create a fresh signing identity
///
/// POST /users
///
/// Generates a new Ed25519 keypair and returns both keys to the
/// caller. The server keeps nothing: the caller is responsible for
/// holding onto the keys and presenting them in later calls.
pub async fn create_user() -> Json<User> {
    let identity = Identity::generate();
    let user = identity.to_user();

    info!(verifying_key = %user.verifying_key, "Created user identity");

    Json(user)
}
