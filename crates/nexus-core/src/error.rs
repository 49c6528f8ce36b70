use crate::id::{CampaignId, UserId};

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Alias for `Result<T, NexusError>`.
pub type NexusResult<T> = Result<T, NexusError>;

/// A progression rule was asked to do something the current state forbids.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The balance is below the price of the requested purchase.
    #[error("insufficient balance: {balance} CARE available, {required} required")]
    InsufficientBalance {
        /// Balance at the time of the attempt.
        balance: u64,
        /// Price of the purchase.
        required: u64,
    },

    /// The egg lifecycle is not in a state that allows the transition.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Failures reported by a record store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The referenced record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Record kind ("user", "campaign", ...).
        kind: &'static str,
        /// The identifier that was looked up.
        id: String,
    },

    /// The campaign exists but belongs to a different user.
    #[error("user {user} does not have access to campaign {campaign}")]
    PermissionDenied {
        /// The campaign that was requested.
        campaign: CampaignId,
        /// The user who requested it.
        user: UserId,
    },

    /// The stored record changed since the caller read it.
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    /// The backing store could not be reached, read, or written.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Whether retrying the same operation may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Any error the core can produce.
#[derive(Debug, thiserror::Error)]
pub enum NexusError {
    /// A progression rule rejected the transition.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The record store rejected or failed the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}
