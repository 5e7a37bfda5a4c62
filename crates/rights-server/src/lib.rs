//! Rights Ledger Server
//!
//! HTTP service that issues and transfers digital rights over creative
//! works, persisting every rights-related entity as an immutable,
//! ledger-backed record:
//!
//! - Clients create a signing identity
//! - A work/manifestation pair is registered together with its
//!   copyright in one operation
//! - New rights (e.g. licenses) are derived from existing rights
//! - Right ownership is transferred between identities, each handoff
//!   recorded as an immutable assignment
//!
//! ## API Endpoints
//!
//! - `GET /health` - Liveness check
//! - `POST /users` - Create a signing identity
//! - `POST /manifestations` - Register work + manifestation + copyright
//! - `POST /rights` - Derive a new right from an existing one
//! - `POST /rights/transfer` - Transfer a right to a new holder

pub mod api;
pub mod engine;
pub mod ledger;

pub use api::create_router;
pub use api::handlers::AppState;
pub use engine::{EngineError, LifecycleEngine, ResolvedRight};
pub use ledger::{Ledger, LedgerEntry, LedgerError, MemoryLedger};
