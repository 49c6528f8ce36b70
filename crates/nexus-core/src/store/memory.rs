use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecordStore;
use crate::campaign::Campaign;
use crate::error::{StoreError, StoreResult};
use crate::id::{CampaignId, UserId};
use crate::session::{Session, sort_recent_first};
use crate::user::UserProfile;

/// A store that keeps every record in memory, in insertion order.
///
/// Serializable so that [`super::JsonFileStore`] can persist it whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    users: Vec<UserProfile>,
    #[serde(default)]
    campaigns: Vec<Campaign>,
    #[serde(default)]
    sessions: Vec<Session>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn session_count(&self) -> usize {
        self.sessions.len()
    }

    fn user_slot(&mut self, id: &UserId) -> StoreResult<&mut UserProfile> {
        self.users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(|| not_found("user", id))
    }

    fn owned_campaign(&self, user: &UserId, id: &CampaignId) -> StoreResult<&Campaign> {
        let campaign = self
            .campaigns
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| not_found("campaign", id))?;
        if &campaign.owner != user {
            return Err(StoreError::PermissionDenied {
                campaign: id.clone(),
                user: user.clone(),
            });
        }
        Ok(campaign)
    }
}

fn not_found(kind: &'static str, id: impl ToString) -> StoreError {
    StoreError::NotFound {
        kind,
        id: id.to_string(),
    }
}

impl RecordStore for MemoryStore {
    fn user(&self, id: &UserId) -> StoreResult<UserProfile> {
        self.users
            .iter()
            .find(|u| &u.id == id)
            .cloned()
            .ok_or_else(|| not_found("user", id))
    }

    fn user_by_email(&self, email: &str) -> StoreResult<UserProfile> {
        self.users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
            .ok_or_else(|| not_found("user", email))
    }

    fn campaign(&self, user: &UserId, id: &CampaignId) -> StoreResult<(Campaign, Vec<Session>)> {
        let campaign = self.owned_campaign(user, id)?.clone();
        let mut sessions: Vec<Session> = self
            .sessions
            .iter()
            .filter(|s| &s.campaign_id == id)
            .cloned()
            .collect();
        sort_recent_first(&mut sessions);
        Ok((campaign, sessions))
    }

    fn campaigns_of(&self, user: &UserId) -> StoreResult<Vec<Campaign>> {
        let mut campaigns: Vec<Campaign> = self
            .campaigns
            .iter()
            .filter(|c| &c.owner == user)
            .cloned()
            .collect();
        // Undated campaigns sort last.
        campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(campaigns)
    }

    fn recent_sessions(&self, user: &UserId, limit: usize) -> StoreResult<Vec<Session>> {
        let mut sessions: Vec<Session> = self
            .sessions
            .iter()
            .filter(|s| &s.user_id == user)
            .cloned()
            .collect();
        sort_recent_first(&mut sessions);
        sessions.truncate(limit);
        Ok(sessions)
    }

    fn create_user(&mut self, email: &str, at: DateTime<Utc>) -> StoreResult<UserProfile> {
        if self.user_by_email(email).is_ok() {
            return Err(StoreError::PreconditionFailed(format!(
                "email already registered: {email}"
            )));
        }
        let user = UserProfile::new(UserId::new(), email).with_created_at(at);
        self.users.push(user.clone());
        tracing::debug!(user = %user.id, "created user");
        Ok(user)
    }

    fn create_campaign(&mut self, campaign: Campaign) -> StoreResult<()> {
        self.user(&campaign.owner)?;
        if self.campaigns.iter().any(|c| c.id == campaign.id) {
            return Err(StoreError::PreconditionFailed(format!(
                "campaign already exists: {}",
                campaign.id
            )));
        }
        tracing::debug!(campaign = %campaign.id, owner = %campaign.owner, "created campaign");
        self.campaigns.push(campaign);
        Ok(())
    }

    fn commit_user(&mut self, expected: &UserProfile, updated: UserProfile) -> StoreResult<()> {
        if expected.id != updated.id {
            return Err(StoreError::PreconditionFailed(
                "cannot change a user's id".into(),
            ));
        }
        let slot = self.user_slot(&expected.id)?;
        if *slot != *expected {
            return Err(StoreError::PreconditionFailed(format!(
                "user {} changed since it was read",
                expected.id
            )));
        }
        *slot = updated;
        tracing::debug!(user = %expected.id, "committed user");
        Ok(())
    }

    fn append_session(&mut self, session: Session) -> StoreResult<()> {
        if self.sessions.iter().any(|s| s.id == session.id) {
            return Err(StoreError::PreconditionFailed(format!(
                "session already logged: {}",
                session.id
            )));
        }
        self.owned_campaign(&session.user_id, &session.campaign_id)?;
        if let Some(campaign) = self
            .campaigns
            .iter_mut()
            .find(|c| c.id == session.campaign_id)
        {
            campaign.care_earned = campaign.care_earned.saturating_add(session.care_earned);
        }
        tracing::debug!(
            session = %session.id,
            campaign = %session.campaign_id,
            care = session.care_earned,
            "appended session"
        );
        self.sessions.push(session);
        Ok(())
    }

    fn log_session(
        &mut self,
        session: Session,
        expected: &UserProfile,
        updated: UserProfile,
    ) -> StoreResult<()> {
        let mut next = self.clone();
        next.append_session(session)?;
        next.commit_user(expected, updated)?;
        *self = next;
        Ok(())
    }
}
