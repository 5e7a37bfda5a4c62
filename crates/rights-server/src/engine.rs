//! Lifecycle engine
//!
//! Implements the two state-transition protocols over rights, *derive*
//! and *transfer*, plus manifestation registration. The engine owns
//! entity construction and validation; the ledger behind it owns
//! persist-ids and the current-holder state.
//!
//! All validation happens before the first ledger write of an
//! operation, so a rejected request never leaves partial records
//! behind. Ledger failures propagate unchanged; retry policy belongs
//! to the caller.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use rights_core::{
    Copyright, Manifestation, ManifestationData, Right, RightData, RightRecord,
    RightsAssignment, User, Work, WorkData,
};

use crate::ledger::{Ledger, LedgerError};

/// Errors from lifecycle operations
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A required field or parameter failed validation
    #[error(transparent)]
    Model(#[from] rights_core::ModelError),

    /// The ledger rejected or failed the operation
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The caller is not the current holder of the right
    #[error("Holder mismatch: caller does not hold right `{id}`")]
    Unauthorized { id: String },

    /// An entity record failed to encode or decode
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}

/// A transferable right loaded from the ledger, together with the
/// ledger's view of its current holder
#[derive(Debug, Clone)]
pub struct ResolvedRight {
    pub record: RightRecord,
    pub holder: String,
}

/// Orchestrates validation, entity construction, and ledger calls
///
/// The ledger is an explicit dependency so tests can substitute their
/// own backend; the engine keeps no other state.
#[derive(Debug, Clone)]
pub struct LifecycleEngine {
    ledger: Arc<dyn Ledger>,
}

impl LifecycleEngine {
    /// Create an engine backed by the given ledger
    pub fn new(ledger: Arc<dyn Ledger>) -> Self {
        Self { ledger }
    }

    /// Register a Work, its Manifestation, and the Copyright over it
    ///
    /// Persists all three records, wiring the relation fields
    /// (`manifestationOfWork`, `rightsOf`) with the assigned
    /// persist-ids. The copyright holder becomes the ledger-side
    /// holder of all three records.
    pub async fn register_manifestation(
        &self,
        work_data: WorkData,
        manifestation_data: ManifestationData,
        copyright_holder: &User,
    ) -> Result<(Work, Manifestation, Copyright), EngineError> {
        // Validate everything before the first write
        work_data.validate()?;
        manifestation_data.validate()?;
        copyright_holder.validate()?;

        let holder_key = copyright_holder.verifying_key.as_str();

        let mut work = work_data.build()?;
        work.id = self
            .ledger
            .persist(serde_json::to_value(&work)?, holder_key)
            .await?;

        let mut manifestation = manifestation_data.build(&work.id)?;
        manifestation.id = self
            .ledger
            .persist(serde_json::to_value(&manifestation)?, holder_key)
            .await?;

        let mut copyright = Copyright::new(&manifestation.id);
        copyright.id = self
            .ledger
            .persist(serde_json::to_value(&copyright)?, holder_key)
            .await?;

        info!(
            work_id = %work.id,
            manifestation_id = %manifestation.id,
            copyright_id = %copyright.id,
            "Registered manifestation"
        );

        Ok((work, manifestation, copyright))
    }

    /// Derive a new Right from an existing right
    ///
    /// The source right is recorded as the new right's `allowedBy`
    /// pointer without being resolved: existence is checked lazily,
    /// when the right is later used in a transfer.
    pub async fn derive_right(
        &self,
        right_data: RightData,
        source_right_id: &str,
        current_holder: &User,
    ) -> Result<Right, EngineError> {
        right_data.validate()?;
        current_holder.validate()?;
        if source_right_id.is_empty() {
            return Err(rights_core::ModelError::MissingParameter("sourceRightId").into());
        }

        let mut right = right_data.build(source_right_id)?;
        right.id = self
            .ledger
            .persist(
                serde_json::to_value(&right)?,
                &current_holder.verifying_key,
            )
            .await?;

        info!(
            right_id = %right.id,
            allowed_by = %right.allowed_by,
            "Derived right"
        );

        Ok(right)
    }

    /// Transfer a right to a new holder
    ///
    /// The holder check here is a courtesy pre-check for a clean
    /// error; the ledger re-checks atomically when executing the
    /// transfer, so a concurrent transfer by the same holder cannot
    /// double-spend the right.
    pub async fn transfer_right(
        &self,
        right_id: &str,
        current_holder: &User,
        to: &User,
        assignment_data: Option<Value>,
    ) -> Result<RightsAssignment, EngineError> {
        current_holder.validate()?;
        to.validate()?;

        let resolved = self.resolve(right_id).await?;
        if resolved.holder != current_holder.verifying_key {
            warn!(
                right_id = %right_id,
                entity_type = %resolved.record.entity_type(),
                "Transfer rejected: caller is not the current holder"
            );
            return Err(EngineError::Unauthorized {
                id: right_id.to_string(),
            });
        }

        let mut assignment = RightsAssignment::new(
            right_id,
            &current_holder.verifying_key,
            &to.verifying_key,
            assignment_data.clone(),
        );
        assignment.id = self
            .ledger
            .transfer(
                right_id,
                &current_holder.verifying_key,
                &to.verifying_key,
                assignment_data,
            )
            .await?;

        info!(
            right_id = %right_id,
            assignment_id = %assignment.id,
            "Transferred right"
        );

        Ok(assignment)
    }

    /// Resolve a persist-id to a transferable right
    ///
    /// Discriminates on the stored record's `@type` tag: anything
    /// other than a Right or Copyright is a type mismatch.
    pub async fn resolve(&self, id: &str) -> Result<ResolvedRight, EngineError> {
        let entry = self.ledger.load(id).await?;

        let entity_type = entry
            .payload
            .get("@type")
            .and_then(Value::as_str)
            .map(str::to_owned);
        let mut record = match entity_type.as_deref() {
            Some(Right::TYPE) => RightRecord::Right(serde_json::from_value(entry.payload)?),
            Some(Copyright::TYPE) => {
                RightRecord::Copyright(serde_json::from_value(entry.payload)?)
            }
            _ => {
                return Err(LedgerError::TypeMismatch {
                    id: id.to_string(),
                    expected: "transferable right",
                }
                .into())
            }
        };
        record.set_id(entry.id);

        Ok(ResolvedRight {
            record,
            holder: entry.holder,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::MemoryLedger;
    use rights_core::{Identity, ModelError};

    fn engine() -> LifecycleEngine {
        LifecycleEngine::new(Arc::new(MemoryLedger::new()))
    }

    fn work_data() -> WorkData {
        WorkData {
            name: Some("The Lord of the Rings Triology".into()),
            author: Some("J. R. R. Tolkien".into()),
        }
    }

    fn manifestation_data() -> ManifestationData {
        ManifestationData {
            name: Some("The Fellowship of the Ring".into()),
            date_published: Some("29-07-1954".into()),
            url: Some("http://localhost/lordoftherings.txt".into()),
        }
    }

    #[tokio::test]
    async fn test_register_manifestation_links_records() {
        let engine = engine();
        let holder = Identity::generate().to_user();

        let (work, manifestation, copyright) = engine
            .register_manifestation(work_data(), manifestation_data(), &holder)
            .await
            .unwrap();

        assert!(!work.id.is_empty());
        assert!(manifestation.is_manifestation);
        assert_eq!(manifestation.manifestation_of_work, work.id);
        assert_eq!(copyright.rights_of, manifestation.id);
    }

    #[tokio::test]
    async fn test_register_manifestation_missing_date() {
        let engine = engine();
        let holder = Identity::generate().to_user();

        let mut data = manifestation_data();
        data.date_published = None;

        let err = engine
            .register_manifestation(work_data(), data, &holder)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Model(ModelError::MissingField("datePublished"))
        ));
    }

    #[tokio::test]
    async fn test_derive_right_sets_allowed_by() {
        let engine = engine();
        let holder = Identity::generate().to_user();

        let right = engine
            .derive_right(
                RightData {
                    license: Some("http://www.ascribe.io/terms".into()),
                },
                "mockId",
                &holder,
            )
            .await
            .unwrap();

        assert_eq!(right.allowed_by, "mockId");
        assert_eq!(right.license, "http://www.ascribe.io/terms");
        assert!(!right.id.is_empty());
    }

    #[tokio::test]
    async fn test_derive_right_missing_license() {
        let engine = engine();
        let holder = Identity::generate().to_user();

        let err = engine
            .derive_right(RightData { license: None }, "mockId", &holder)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Model(ModelError::MissingField("license"))
        ));
    }

    #[tokio::test]
    async fn test_derive_right_empty_source_id() {
        let engine = engine();
        let holder = Identity::generate().to_user();

        let err = engine
            .derive_right(
                RightData {
                    license: Some("http://example.com/l".into()),
                },
                "",
                &holder,
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Model(ModelError::MissingParameter("sourceRightId"))
        ));
    }

    #[tokio::test]
    async fn test_transfer_rotates_holder() {
        let engine = engine();
        let alice = Identity::generate().to_user();
        let bob = Identity::generate().to_user();

        let right = engine
            .derive_right(
                RightData {
                    license: Some("http://example.com/l".into()),
                },
                "mockId",
                &alice,
            )
            .await
            .unwrap();

        let assignment = engine
            .transfer_right(&right.id, &alice, &bob, None)
            .await
            .unwrap();
        assert_eq!(assignment.transfer_of, right.id);
        assert_eq!(assignment.from, alice.verifying_key);
        assert_eq!(assignment.to, bob.verifying_key);
        assert!(!assignment.id.is_empty());

        let resolved = engine.resolve(&right.id).await.unwrap();
        assert_eq!(resolved.holder, bob.verifying_key);

        // The old holder can no longer transfer
        let carol = Identity::generate().to_user();
        let err = engine
            .transfer_right(&right.id, &alice, &carol, None)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_transfer_copyright_resolves_as_copyright() {
        let engine = engine();
        let alice = Identity::generate().to_user();
        let bob = Identity::generate().to_user();

        let (_, _, copyright) = engine
            .register_manifestation(work_data(), manifestation_data(), &alice)
            .await
            .unwrap();

        let resolved = engine.resolve(&copyright.id).await.unwrap();
        assert!(matches!(resolved.record, RightRecord::Copyright(_)));

        let assignment = engine
            .transfer_right(&copyright.id, &alice, &bob, None)
            .await
            .unwrap();
        assert_eq!(assignment.transfer_of, copyright.id);
    }

    #[tokio::test]
    async fn test_transfer_unknown_id() {
        let engine = engine();
        let alice = Identity::generate().to_user();
        let bob = Identity::generate().to_user();

        let err = engine
            .transfer_right("missing", &alice, &bob, None)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Ledger(LedgerError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_transfer_non_right_record() {
        let engine = engine();
        let alice = Identity::generate().to_user();
        let bob = Identity::generate().to_user();

        let (work, _, _) = engine
            .register_manifestation(work_data(), manifestation_data(), &alice)
            .await
            .unwrap();

        // A Work is not a transferable right
        let err = engine
            .transfer_right(&work.id, &alice, &bob, None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Ledger(LedgerError::TypeMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_round_trip() {
        let engine = engine();
        let alice = Identity::generate().to_user();

        let right = engine
            .derive_right(
                RightData {
                    license: Some("http://example.com/l".into()),
                },
                "source-1",
                &alice,
            )
            .await
            .unwrap();

        let resolved = engine.resolve(&right.id).await.unwrap();
        assert_eq!(resolved.record, RightRecord::Right(right));
        assert_eq!(resolved.holder, alice.verifying_key);
    }
}
