//! The record-store contract the core reads snapshots from and commits
//! progression updates through.
//!
//! Stores are synchronous. Every mutating method is all-or-nothing: on
//! error the store is left exactly as it was.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use chrono::{DateTime, Utc};

use crate::campaign::Campaign;
use crate::error::{StoreError, StoreResult};
use crate::id::{CampaignId, UserId};
use crate::session::Session;
use crate::user::{EggState, UserProfile};

/// A persistent home for users, campaigns, and sessions.
pub trait RecordStore {
    /// Look up a user by id.
    fn user(&self, id: &UserId) -> StoreResult<UserProfile>;

    /// Look up a user by login email.
    fn user_by_email(&self, email: &str) -> StoreResult<UserProfile>;

    /// Load a campaign and its sessions, most recent first.
    ///
    /// Fails with `PermissionDenied` if the campaign belongs to someone
    /// other than `user`.
    fn campaign(&self, user: &UserId, id: &CampaignId) -> StoreResult<(Campaign, Vec<Session>)>;

    /// All campaigns owned by `user`, newest first.
    fn campaigns_of(&self, user: &UserId) -> StoreResult<Vec<Campaign>>;

    /// The user's most recent sessions across all campaigns.
    fn recent_sessions(&self, user: &UserId, limit: usize) -> StoreResult<Vec<Session>>;

    /// Register a new account with a zero balance and no egg.
    fn create_user(&mut self, email: &str, at: DateTime<Utc>) -> StoreResult<UserProfile>;

    /// Add a campaign. Its owner must exist.
    fn create_campaign(&mut self, campaign: Campaign) -> StoreResult<()>;

    /// Replace a user profile if the stored copy still equals `expected`.
    fn commit_user(&mut self, expected: &UserProfile, updated: UserProfile) -> StoreResult<()>;

    /// Append a session and add its CARE to the campaign total.
    fn append_session(&mut self, session: Session) -> StoreResult<()>;

    /// Append a session and commit the owner's updated profile as one
    /// operation. Neither change is applied if either would fail.
    fn log_session(
        &mut self,
        session: Session,
        expected: &UserProfile,
        updated: UserProfile,
    ) -> StoreResult<()>;

    /// Commit the result of [`crate::progression::purchase_egg`].
    ///
    /// Besides the compare-and-set on the whole profile, rejects any update
    /// that is not a none → incubating transition, so two racing purchases
    /// can never both deduct the price.
    fn commit_egg_purchase(
        &mut self,
        expected: &UserProfile,
        updated: UserProfile,
    ) -> StoreResult<()> {
        if expected.egg != EggState::None || !matches!(updated.egg, EggState::Incubating { .. }) {
            return Err(StoreError::PreconditionFailed(format!(
                "egg purchase must move {} from none to incubating",
                expected.id
            )));
        }
        self.commit_user(expected, updated)
    }
}
