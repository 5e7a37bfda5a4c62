//! Rights assignments
//!
//! A RightsAssignment is the immutable record documenting one handoff
//! of a right between holders. The chain of assignments for a right is
//! its audit trail; a right can be transferred indefinitely, producing
//! one assignment per hop.

use serde::{Deserialize, Serialize};

use crate::COALAIP_CONTEXT;

/// Immutable record of one transfer of a right's holder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RightsAssignment {
    #[serde(rename = "@context")]
    pub context: String,

    #[serde(rename = "@type")]
    pub entity_type: String,

    /// Persist-id assigned by the ledger
    #[serde(rename = "@id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Persist-id of the transferred right
    #[serde(rename = "transferOf")]
    pub transfer_of: String,

    /// Verifying key of the holder giving up the right
    pub from: String,

    /// Verifying key of the new holder
    pub to: String,

    /// Optional client-supplied metadata attached to the assignment;
    /// never load-bearing for the transfer itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl RightsAssignment {
    pub const TYPE: &'static str = "RightsAssignment";

    /// Construct the assignment record for one transfer
    pub fn new(
        right_id: &str,
        from: &str,
        to: &str,
        metadata: Option<serde_json::Value>,
    ) -> Self {
        Self {
            context: COALAIP_CONTEXT.into(),
            entity_type: Self::TYPE.into(),
            id: String::new(),
            transfer_of: right_id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            metadata,
        }
    }
}
