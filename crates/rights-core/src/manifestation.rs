//! Manifestation entities
//!
//! A Manifestation is a concrete instantiation of a Work (a specific
//! file or edition) and is always created together with the Work it
//! manifests and the Copyright over it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::work::require;
use crate::{COALAIP_CONTEXT, SCHEMA_CONTEXT};

/// Date formats accepted for `datePublished`
const DATE_FORMATS: [&str; 2] = ["%d-%m-%Y", "%Y-%m-%d"];

/// Request-shaped draft of a Manifestation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestationData {
    pub name: Option<String>,
    pub date_published: Option<String>,
    pub url: Option<String>,
}

impl ManifestationData {
    /// Check all required attributes are present and the date parses
    pub fn validate(&self) -> Result<()> {
        require(&self.name, "name")?;
        require(&self.date_published, "datePublished")?;
        require(&self.url, "url")?;

        let date = self.date_published.as_deref().unwrap_or_default();
        if !DATE_FORMATS
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(date, fmt).is_ok())
        {
            return Err(ModelError::InvalidDate {
                field: "datePublished",
                value: date.to_string(),
            });
        }
        Ok(())
    }

    /// Validate and construct the Manifestation record referencing its Work
    pub fn build(self, work_id: &str) -> Result<Manifestation> {
        self.validate()?;
        Ok(Manifestation {
            context: vec![COALAIP_CONTEXT.into(), SCHEMA_CONTEXT.into()],
            entity_type: Manifestation::TYPE.into(),
            id: String::new(),
            name: self.name.unwrap_or_default(),
            date_published: self.date_published.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            is_manifestation: true,
            manifestation_of_work: work_id.to_string(),
        })
    }
}

/// Immutable record of a concrete instantiation of a Work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifestation {
    #[serde(rename = "@context")]
    pub context: Vec<String>,

    #[serde(rename = "@type")]
    pub entity_type: String,

    /// Persist-id assigned by the ledger
    #[serde(rename = "@id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub name: String,
    pub date_published: String,
    pub url: String,

    /// Marker distinguishing manifestations from abstract works, since
    /// both share the `CreativeWork` type
    pub is_manifestation: bool,

    /// Persist-id of the Work this record manifests
    pub manifestation_of_work: String,
}

impl Manifestation {
    pub const TYPE: &'static str = "CreativeWork";
}
