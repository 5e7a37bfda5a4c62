//! In-memory ledger backend
//!
//! Default ledger implementation using in-memory hashmaps.
//! Suitable for development and tests. Data is lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::{Ledger, LedgerEntry, LedgerError};

/// One transfer recorded against a ledger record
#[derive(Debug, Clone)]
struct AssignmentRow {
    right_id: String,
    from: String,
    to: String,
    #[allow(dead_code)]
    metadata: Option<serde_json::Value>,
}

/// In-memory ledger implementation
#[derive(Debug, Default)]
pub struct MemoryLedger {
    records: RwLock<HashMap<String, LedgerEntry>>,
    assignments: RwLock<HashMap<String, AssignmentRow>>,
}

impl MemoryLedger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of assignments recorded against a record (audit trail length)
    pub fn assignment_count(&self, right_id: &str) -> usize {
        let assignments = self.assignments.read().unwrap();
        assignments
            .values()
            .filter(|a| a.right_id == right_id)
            .count()
    }
}

#[async_trait]
impl Ledger for MemoryLedger {
    async fn persist(
        &self,
        payload: serde_json::Value,
        holder: &str,
    ) -> Result<String, LedgerError> {
        let id = Uuid::new_v4().to_string();
        let mut records = self.records.write().unwrap();
        info!(id = %id, holder = %holder, "Persisting record");
        records.insert(
            id.clone(),
            LedgerEntry {
                id: id.clone(),
                payload,
                holder: holder.to_string(),
            },
        );
        Ok(id)
    }

    async fn load(&self, id: &str) -> Result<LedgerEntry, LedgerError> {
        let records = self.records.read().unwrap();
        records
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))
    }

    async fn transfer(
        &self,
        id: &str,
        from: &str,
        to: &str,
        metadata: Option<serde_json::Value>,
    ) -> Result<String, LedgerError> {
        // Holder check and update share the write lock: of two
        // concurrent transfers by the same holder, exactly one wins.
        let mut records = self.records.write().unwrap();
        let entry = records
            .get_mut(id)
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))?;

        if entry.holder != from {
            return Err(LedgerError::HolderMismatch(id.to_string()));
        }
        entry.holder = to.to_string();

        let assignment_id = Uuid::new_v4().to_string();
        let mut assignments = self.assignments.write().unwrap();
        info!(
            id = %id,
            assignment_id = %assignment_id,
            to = %to,
            "Transferred record"
        );
        assignments.insert(
            assignment_id.clone(),
            AssignmentRow {
                right_id: id.to_string(),
                from: from.to_string(),
                to: to.to_string(),
                metadata,
            },
        );
        Ok(assignment_id)
    }
}
