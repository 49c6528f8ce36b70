//! Core types for Nexus Hub: user profiles, campaigns, sessions, and the
//! CARE progression engine.
//!
//! Everything in this crate except the [`store`] module is pure: the
//! progression rules take a profile snapshot and hand back a new one. The
//! store module defines the record-store contract that callers commit those
//! snapshots through, plus in-memory and JSON-file implementations.

/// Campaign records and game-system labels.
pub mod campaign;
/// Error types used throughout the crate.
pub mod error;
/// String-backed identifiers for users, campaigns, and sessions.
pub mod id;
/// The CARE economy and Ember Egg progression rules.
pub mod progression;
/// Session records and CARE earning actions.
pub mod session;
/// Record-store contract and implementations.
pub mod store;
/// User profiles and the egg lifecycle state.
pub mod user;

/// Re-export campaign types.
pub use campaign::{Campaign, GameSystem};
/// Re-export error types.
pub use error::{EngineError, NexusError, NexusResult, StoreError, StoreResult};
/// Re-export identifier types.
pub use id::{CampaignId, SessionId, UserId};
/// Re-export progression types.
pub use progression::{DerivedState, EggProgress, Module};
/// Re-export session types.
pub use session::{CareAction, Session};
/// Re-export store types.
pub use store::{JsonFileStore, MemoryStore, RecordStore};
/// Re-export user types.
pub use user::{Dragon, EggState, EggStatus, UserProfile};
