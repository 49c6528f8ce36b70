use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{CampaignId, SessionId, UserId};

/// Something a player did at the table that earns CARE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CareAction {
    /// Showed up to the session.
    SessionAttendance,
    /// Contributed to the shared story.
    CollaborativeStorytelling,
    /// Helped another player.
    HelpedAnotherPlayer,
    /// Wrote up the session recap.
    CreatedSessionRecap,
    /// Attendance verified by NFC tag. Not earnable yet.
    NfcVerifiedAttendance,
}

impl CareAction {
    /// Every action, in display order.
    pub const ALL: [CareAction; 5] = [
        Self::SessionAttendance,
        Self::CollaborativeStorytelling,
        Self::HelpedAnotherPlayer,
        Self::CreatedSessionRecap,
        Self::NfcVerifiedAttendance,
    ];

    /// Human-readable label, also stored in [`Session::actions`].
    pub fn label(self) -> &'static str {
        match self {
            Self::SessionAttendance => "Session Attendance",
            Self::CollaborativeStorytelling => "Collaborative Storytelling",
            Self::HelpedAnotherPlayer => "Helped Another Player",
            Self::CreatedSessionRecap => "Created Session Recap",
            Self::NfcVerifiedAttendance => "NFC Verified Attendance",
        }
    }

    /// CARE granted for this action.
    pub fn reward(self) -> u64 {
        match self {
            Self::SessionAttendance | Self::CreatedSessionRecap => 10,
            Self::CollaborativeStorytelling
            | Self::HelpedAnotherPlayer
            | Self::NfcVerifiedAttendance => 5,
        }
    }

    /// Whether the action can currently be claimed.
    pub fn is_available(self) -> bool {
        !matches!(self, Self::NfcVerifiedAttendance)
    }

    /// Parse a short CLI-style name such as `attendance` or `recap`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "attendance" | "session-attendance" => Some(Self::SessionAttendance),
            "storytelling" | "collaborative-storytelling" => Some(Self::CollaborativeStorytelling),
            "helped" | "helped-another-player" => Some(Self::HelpedAnotherPlayer),
            "recap" | "created-session-recap" => Some(Self::CreatedSessionRecap),
            "nfc" | "nfc-verified-attendance" => Some(Self::NfcVerifiedAttendance),
            _ => None,
        }
    }
}

/// One logged play session. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Session identifier.
    pub id: SessionId,
    /// The campaign this session belongs to.
    pub campaign_id: CampaignId,
    /// The campaign's owner.
    pub user_id: UserId,
    /// When the session was played. Older records may not carry one.
    #[serde(default)]
    pub session_date: Option<DateTime<Utc>>,
    /// CARE granted for the session.
    #[serde(default)]
    pub care_earned: u64,
    /// Optional free-text recap.
    #[serde(default)]
    pub recap: Option<String>,
    /// Labels of the actions that earned CARE, in the order claimed.
    #[serde(default)]
    pub actions: Vec<String>,
}

impl Session {
    /// Create a session with no reward, recap, or actions.
    pub fn new(
        id: SessionId,
        campaign_id: CampaignId,
        user_id: UserId,
        session_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            campaign_id,
            user_id,
            session_date: Some(session_date),
            care_earned: 0,
            recap: None,
            actions: Vec::new(),
        }
    }

    /// Set the CARE reward directly.
    pub fn with_care(mut self, care_earned: u64) -> Self {
        self.care_earned = care_earned;
        self
    }

    /// Set the recap text.
    pub fn with_recap(mut self, recap: impl Into<String>) -> Self {
        self.recap = Some(recap.into());
        self
    }

    /// Claim earning actions: records their labels and adds their rewards.
    /// Actions that are not yet available are ignored.
    pub fn with_actions(mut self, actions: &[CareAction]) -> Self {
        for action in actions.iter().filter(|a| a.is_available()) {
            self.actions.push(action.label().to_string());
            self.care_earned += action.reward();
        }
        self
    }

    /// The recap, treating an empty string as absent.
    pub fn recap(&self) -> Option<&str> {
        self.recap.as_deref().filter(|r| !r.is_empty())
    }
}

/// Sort sessions most-recent-first. Undated sessions go last; sessions on
/// the same date keep their relative order.
pub fn sort_recent_first(sessions: &mut [Session]) {
    sessions.sort_by(|a, b| b.session_date.cmp(&a.session_date));
}
