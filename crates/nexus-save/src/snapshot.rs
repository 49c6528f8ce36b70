//! The immutable input to the compiler.

use chrono::{DateTime, Utc};

use nexus_core::progression::{self, DerivedState};
use nexus_core::session::sort_recent_first;
use nexus_core::{Campaign, CampaignId, Session, UserProfile};

/// Everything a SAVE_CODE is built from, frozen at one point in time.
#[derive(Debug, Clone)]
pub struct SaveSnapshot {
    user: UserProfile,
    campaign: Campaign,
    sessions: Vec<Session>,
    generated_at: DateTime<Utc>,
}

impl SaveSnapshot {
    /// Build a snapshot. Sessions are re-sorted most-recent-first; sessions
    /// on the same date keep the order they were given in.
    pub fn new(
        user: UserProfile,
        campaign: Campaign,
        mut sessions: Vec<Session>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        sort_recent_first(&mut sessions);
        Self {
            user,
            campaign,
            sessions,
            generated_at,
        }
    }

    /// The campaign owner's profile.
    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    /// The exported campaign.
    pub fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    /// The exported campaign's id.
    pub fn campaign_id(&self) -> &CampaignId {
        &self.campaign.id
    }

    /// Sessions, most recent first.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// When the document is being generated.
    pub fn generated_at(&self) -> &DateTime<Utc> {
        &self.generated_at
    }

    /// Run the progression engine over this snapshot.
    pub fn derive(&self) -> DerivedState {
        progression::derive(&self.user, &self.sessions)
    }
}
