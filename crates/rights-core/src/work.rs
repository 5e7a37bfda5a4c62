//! Work entities
//!
//! A Work is the abstract creative work (e.g. a novel); concrete
//! editions of it are recorded as Manifestations.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::{COALAIP_CONTEXT, SCHEMA_CONTEXT};

/// Request-shaped draft of a Work, validated before construction
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkData {
    pub name: Option<String>,
    pub author: Option<String>,
}

impl WorkData {
    /// Check all required attributes are present
    pub fn validate(&self) -> Result<()> {
        require(&self.name, "name")?;
        require(&self.author, "author")?;
        Ok(())
    }

    /// Validate and construct the Work record (persist-id not yet assigned)
    pub fn build(self) -> Result<Work> {
        self.validate()?;
        Ok(Work {
            context: vec![COALAIP_CONTEXT.into(), SCHEMA_CONTEXT.into()],
            entity_type: Work::TYPE.into(),
            id: String::new(),
            name: self.name.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
        })
    }
}

/// Immutable descriptive record of a creative work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    #[serde(rename = "@context")]
    pub context: Vec<String>,

    #[serde(rename = "@type")]
    pub entity_type: String,

    /// Persist-id assigned by the ledger
    #[serde(rename = "@id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub name: String,
    pub author: String,
}

impl Work {
    pub const TYPE: &'static str = "CreativeWork";
}

pub(crate) fn require(value: &Option<String>, field: &'static str) -> Result<()> {
    match value {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(ModelError::MissingField(field)),
    }
}
