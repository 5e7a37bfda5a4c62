//! Right entities
//!
//! A Right is a grant (typically a license) held by an identity. Every
//! Right except a Copyright is derived from some other right, recorded
//! by its `allowedBy` pointer; Copyrights are the root rights created
//! alongside a Manifestation. Together the `allowedBy` / `rightsOf`
//! pointers form an append-only provenance chain on the ledger.
//!
//! The current holder of a right is ledger-side state, not part of the
//! record payload: transfers never mutate the record itself.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::work::require;
use crate::COALAIP_CONTEXT;

/// Request-shaped draft of a Right
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RightData {
    pub license: Option<String>,
}

impl RightData {
    /// Check the license is present
    pub fn validate(&self) -> Result<()> {
        require(&self.license, "license")
    }

    /// Validate and construct the Right, pointing at its source right
    ///
    /// The source right is not resolved here: existence checking is
    /// deferred to the point where the right is actually used in a
    /// transfer, keeping the derive write path single-round-trip.
    pub fn build(self, source_right_id: &str) -> Result<Right> {
        self.validate()?;
        Ok(Right {
            context: COALAIP_CONTEXT.into(),
            entity_type: Right::TYPE.into(),
            id: String::new(),
            allowed_by: source_right_id.to_string(),
            license: self.license.unwrap_or_default(),
        })
    }
}

/// A derived right over a creative work (e.g. a license)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Right {
    #[serde(rename = "@context")]
    pub context: String,

    #[serde(rename = "@type")]
    pub entity_type: String,

    /// Persist-id assigned by the ledger
    #[serde(rename = "@id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Persist-id of the Right or Copyright this right was derived from
    #[serde(rename = "allowedBy")]
    pub allowed_by: String,

    /// License URI
    pub license: String,
}

impl Right {
    pub const TYPE: &'static str = "Right";
}

/// The root right over a Manifestation, held by its original creator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Copyright {
    #[serde(rename = "@context")]
    pub context: String,

    #[serde(rename = "@type")]
    pub entity_type: String,

    /// Persist-id assigned by the ledger
    #[serde(rename = "@id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Persist-id of the Manifestation this copyright covers
    #[serde(rename = "rightsOf")]
    pub rights_of: String,
}

impl Copyright {
    pub const TYPE: &'static str = "Copyright";

    /// Construct the Copyright covering a manifestation
    pub fn new(manifestation_id: &str) -> Self {
        Self {
            context: COALAIP_CONTEXT.into(),
            entity_type: Self::TYPE.into(),
            id: String::new(),
            rights_of: manifestation_id.to_string(),
        }
    }
}

/// A transferable right resolved from the ledger
///
/// A persist-id handed to a transfer may name either a plain Right or
/// a Copyright; both are transferable. Discrimination happens once, on
/// the record's `@type` tag, instead of by trial loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RightRecord {
    Right(Right),
    Copyright(Copyright),
}

impl RightRecord {
    /// Persist-id of the underlying record
    pub fn id(&self) -> &str {
        match self {
            RightRecord::Right(r) => &r.id,
            RightRecord::Copyright(c) => &c.id,
        }
    }

    pub fn set_id(&mut self, id: String) {
        match self {
            RightRecord::Right(r) => r.id = id,
            RightRecord::Copyright(c) => c.id = id,
        }
    }

    /// The record's `@type` tag
    pub fn entity_type(&self) -> &str {
        match self {
            RightRecord::Right(r) => &r.entity_type,
            RightRecord::Copyright(c) => &c.entity_type,
        }
    }
}
