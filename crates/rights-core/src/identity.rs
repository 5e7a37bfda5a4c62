//! Signing identities
//!
//! An identity is an Ed25519 keypair held by one actor (a "user" at the
//! HTTP surface). The core only generates keypairs and validates their
//! wire form; transaction signing itself is delegated to the ledger.
//!
//! Identities are never persisted as standalone ledger records.

use base64::{engine::general_purpose::STANDARD, Engine};
use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Ed25519 signing identity
#[derive(Clone)]
pub struct Identity {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("verifying_key", &self.verifying_key())
            .field("signing_key", &"[redacted]")
            .finish()
    }
}

impl Identity {
    /// Generate a fresh random keypair
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        let verifying_key = signing_key.verifying_key();
        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Base64-encoded public verifying key
    pub fn verifying_key(&self) -> String {
        STANDARD.encode(self.verifying_key.to_bytes())
    }

    /// Base64-encoded private signing key
    pub fn signing_key(&self) -> String {
        STANDARD.encode(self.signing_key.to_bytes())
    }

    /// Wire form of this identity
    pub fn to_user(&self) -> User {
        User {
            verifying_key: self.verifying_key(),
            signing_key: self.signing_key(),
        }
    }
}

/// Wire form of an identity: both keys as base64 strings
///
/// This is what clients hold onto between calls and send back as
/// `copyrightHolder`, `currentHolder`, and `to` parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub verifying_key: String,
    pub signing_key: String,
}

impl User {
    /// Check that both keys are present and well-formed
    ///
    /// Must hold before any operation that requires signing.
    pub fn validate(&self) -> Result<()> {
        decode_key(&self.verifying_key, "verifyingKey")?;
        decode_key(&self.signing_key, "signingKey")?;
        Ok(())
    }
}

fn decode_key(key: &str, field: &'static str) -> Result<[u8; 32]> {
    if key.is_empty() {
        return Err(ModelError::MissingField(field));
    }
    let bytes = STANDARD
        .decode(key)
        .map_err(|_| ModelError::MalformedKey(field))?;
    bytes
        .try_into()
        .map_err(|_| ModelError::MalformedKey(field))
}
