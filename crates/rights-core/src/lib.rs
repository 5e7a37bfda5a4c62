//! # Rights Core
//!
//! Entity model and validation rules for the rights ledger service.
//!
//! ## Key Concepts
//!
//! - **Identity**: an Ed25519 keypair holder; the actor in every
//!   rights operation
//! - **Work / Manifestation**: an abstract creative work and a
//!   concrete instantiation of it (a specific file or edition)
//! - **Copyright**: the root right over a Manifestation
//! - **Right**: a grant (e.g. a license) derived from another right,
//!   linked to its source via `allowedBy`
//! - **RightsAssignment**: the immutable record of one holder handoff
//!
//! ## Invariants
//!
//! 1. Validation always precedes persistence: no entity reaches the
//!    ledger with a missing required field
//! 2. Records are immutable after persistence; derivations and
//!    transfers create new records referencing their predecessors
//! 3. Exactly one Copyright exists per Manifestation at creation time

pub mod assignment;
pub mod error;
pub mod identity;
pub mod manifestation;
pub mod right;
pub mod work;

pub use assignment::RightsAssignment;
pub use error::{ModelError, Result};
pub use identity::{Identity, User};
pub use manifestation::{Manifestation, ManifestationData};
pub use right::{Copyright, Right, RightData, RightRecord};
pub use work::{Work, WorkData};

/// JSON-LD context for the rights vocabulary
pub const COALAIP_CONTEXT: &str = "https://w3id.org/coalaip/v1";

/// JSON-LD context for schema.org attributes
pub const SCHEMA_CONTEXT: &str = "http://schema.org/";

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
