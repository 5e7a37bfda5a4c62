//! Ledger abstraction
//!
//! This module provides a trait-based abstraction over the append-only
//! distributed ledger that stores entity records and enforces holder
//! transitions. The in-memory backend is the default and doubles as
//! the test fixture; a real deployment swaps in a client for the
//! external ledger behind the same trait.
//!
//! The ledger owns two things the core never touches:
//! - persist-id assignment
//! - the "current holder" pointer for each record, updated only
//!   through `transfer` under single-writer-wins semantics

pub mod memory;

pub use memory::MemoryLedger;

use async_trait::async_trait;
use std::fmt::Debug;

/// Error type for ledger operations
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// No record exists under the given persist-id
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A record exists but is not of the expected kind
    #[error("Record `{id}` is not a {expected}")]
    TypeMismatch { id: String, expected: &'static str },

    /// The claimed holder does not match the ledger's current holder
    #[error("Holder mismatch for record `{0}`")]
    HolderMismatch(String),

    /// Underlying persistence or transfer failure, not locally
    /// recoverable; propagated to the caller unchanged
    #[error("Ledger backend error: {0}")]
    Backend(String),
}

/// A stored record together with the ledger-side state attached to it
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    /// Persist-id assigned at creation
    pub id: String,
    /// The entity record as persisted
    pub payload: serde_json::Value,
    /// Verifying key of the current holder
    pub holder: String,
}

/// Append-only ledger backend
///
/// Implementations must be thread-safe; `transfer` must check the
/// holder and update it atomically, so that of two concurrent
/// transfers by the same holder exactly one succeeds.
#[async_trait]
pub trait Ledger: Send + Sync + Debug {
    /// Persist an entity record, owned by `holder`; returns the
    /// assigned persist-id
    async fn persist(
        &self,
        payload: serde_json::Value,
        holder: &str,
    ) -> Result<String, LedgerError>;

    /// Load a record by persist-id
    async fn load(&self, id: &str) -> Result<LedgerEntry, LedgerError>;

    /// Transfer the record from its current holder to `to`, recording
    /// an assignment; returns the assignment's persist-id
    async fn transfer(
        &self,
        id: &str,
        from: &str,
        to: &str,
        metadata: Option<serde_json::Value>,
    ) -> Result<String, LedgerError>;
}
