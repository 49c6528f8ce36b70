use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// The companion dragon a user owns once their egg has hatched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dragon {
    /// Stable identifier, if one was assigned at hatching.
    pub id: Option<String>,
    /// Player-chosen name. `None` until the player names it.
    pub name: Option<String>,
    /// When the egg hatched.
    pub hatched_at: Option<DateTime<Utc>>,
}

impl Dragon {
    /// The dragon's name, treating an empty string as unnamed.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// The dragon's id, treating an empty string as unassigned.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Where a user is in the Ember Egg lifecycle.
///
/// Transitions only ever move forward: `None` → `Incubating` → `Hatched`.
/// Data that is meaningful in a single state lives in that variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EggState {
    /// No egg purchased yet.
    #[default]
    None,
    /// Egg purchased and waiting for logged sessions.
    Incubating {
        /// Sessions still needed before the egg hatches.
        sessions_remaining: u32,
    },
    /// Egg hatched into a companion dragon.
    Hatched(Dragon),
}

impl EggState {
    /// The bare status tag of this state.
    pub fn status(&self) -> EggStatus {
        match self {
            Self::None => EggStatus::None,
            Self::Incubating { .. } => EggStatus::Incubating,
            Self::Hatched(_) => EggStatus::Hatched,
        }
    }

    /// The hatched dragon, if any.
    pub fn dragon(&self) -> Option<&Dragon> {
        match self {
            Self::Hatched(dragon) => Some(dragon),
            _ => None,
        }
    }

    /// Sessions remaining until hatching; 0 outside of incubation.
    pub fn sessions_remaining(&self) -> u32 {
        match self {
            Self::Incubating { sessions_remaining } => *sessions_remaining,
            _ => 0,
        }
    }
}

/// The status tag of an [`EggState`], as stored and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EggStatus {
    /// No egg.
    None,
    /// Egg incubating.
    Incubating,
    /// Dragon hatched.
    Hatched,
}

impl EggStatus {
    /// The lowercase tag used in records and exported documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Incubating => "incubating",
            Self::Hatched => "hatched",
        }
    }

    /// Parse a stored tag.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "incubating" => Some(Self::Incubating),
            "hatched" => Some(Self::Hatched),
            _ => None,
        }
    }
}

impl fmt::Display for EggStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A snapshot of a user's account as owned by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserRecord", into = "UserRecord")]
pub struct UserProfile {
    /// Account identifier.
    pub id: UserId,
    /// Login email.
    pub email: String,
    /// Global CARE balance.
    pub care_balance: u64,
    /// Egg lifecycle state.
    pub egg: EggState,
    /// When the account was created.
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// A fresh account: zero balance, no egg.
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            care_balance: 0,
            egg: EggState::None,
            created_at: None,
        }
    }

    /// Set the CARE balance.
    pub fn with_balance(mut self, care_balance: u64) -> Self {
        self.care_balance = care_balance;
        self
    }

    /// Set the egg state.
    pub fn with_egg(mut self, egg: EggState) -> Self {
        self.egg = egg;
        self
    }

    /// Set the creation timestamp.
    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// The bare egg status tag.
    pub fn egg_status(&self) -> EggStatus {
        self.egg.status()
    }
}

/// An egg status tag that is not one of `none`, `incubating`, `hatched`.
#[derive(Debug, thiserror::Error)]
#[error("unknown egg status: \"{0}\"")]
pub struct UnknownEggStatus(String);

/// Flat on-disk shape of a user profile.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    id: UserId,
    email: String,
    #[serde(default)]
    care_balance: u64,
    #[serde(default)]
    egg_status: Option<String>,
    #[serde(default)]
    egg_sessions_remaining: u32,
    #[serde(default)]
    dragon_id: Option<String>,
    #[serde(default)]
    dragon_name: Option<String>,
    #[serde(default)]
    dragon_hatched_at: Option<DateTime<Utc>>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<UserRecord> for UserProfile {
    type Error = UnknownEggStatus;

    fn try_from(r: UserRecord) -> Result<Self, Self::Error> {
        let status = match r.egg_status.as_deref() {
            None => EggStatus::None,
            Some(tag) => EggStatus::parse(tag).ok_or_else(|| UnknownEggStatus(tag.to_string()))?,
        };
        let egg = match status {
            EggStatus::None => EggState::None,
            EggStatus::Incubating => EggState::Incubating {
                sessions_remaining: r.egg_sessions_remaining,
            },
            EggStatus::Hatched => EggState::Hatched(Dragon {
                id: r.dragon_id,
                name: r.dragon_name,
                hatched_at: r.dragon_hatched_at,
            }),
        };
        Ok(Self {
            id: r.id,
            email: r.email,
            care_balance: r.care_balance,
            egg,
            created_at: r.created_at,
        })
    }
}

impl From<UserProfile> for UserRecord {
    fn from(p: UserProfile) -> Self {
        let status = p.egg_status().as_str().to_string();
        let sessions_remaining = p.egg.sessions_remaining();
        let dragon = match p.egg {
            EggState::Hatched(dragon) => dragon,
            _ => Dragon::default(),
        };
        Self {
            id: p.id,
            email: p.email,
            care_balance: p.care_balance,
            egg_status: Some(status),
            egg_sessions_remaining: sessions_remaining,
            dragon_id: dragon.id,
            dragon_name: dragon.name,
            dragon_hatched_at: dragon.hatched_at,
            created_at: p.created_at,
        }
    }
}
