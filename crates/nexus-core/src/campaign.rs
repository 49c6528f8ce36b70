use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{CampaignId, UserId};

/// The game system a campaign is played in.
///
/// Unrecognized systems are kept verbatim in `Other` and share the
/// `Custom` icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameSystem {
    /// Swords and sorcery.
    Fantasy,
    /// Science fiction.
    SciFi,
    /// Cyberpunk.
    Cyberpunk,
    /// Horror.
    Horror,
    /// Low-stakes, cozy play.
    Cozy,
    /// A homebrew system.
    Custom,
    /// Any other label a user typed in.
    Other(String),
}

impl GameSystem {
    /// Parse a stored label. Never fails; unknown labels become `Other`.
    pub fn parse(s: &str) -> Self {
        match s {
            "Fantasy" => Self::Fantasy,
            "Sci-Fi" => Self::SciFi,
            "Cyberpunk" => Self::Cyberpunk,
            "Horror" => Self::Horror,
            "Cozy" => Self::Cozy,
            "Custom" => Self::Custom,
            other => Self::Other(other.to_string()),
        }
    }

    /// Display label.
    pub fn label(&self) -> &str {
        match self {
            Self::Fantasy => "Fantasy",
            Self::SciFi => "Sci-Fi",
            Self::Cyberpunk => "Cyberpunk",
            Self::Horror => "Horror",
            Self::Cozy => "Cozy",
            Self::Custom => "Custom",
            Self::Other(s) => s,
        }
    }

    /// Icon shown next to the campaign name.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Fantasy => "⚔️",
            Self::SciFi => "🚀",
            Self::Cyberpunk => "⚡",
            Self::Horror => "🩸",
            Self::Cozy => "🌿",
            Self::Custom | Self::Other(_) => "🎲",
        }
    }
}

impl From<String> for GameSystem {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<GameSystem> for String {
    fn from(system: GameSystem) -> Self {
        system.label().to_string()
    }
}

impl fmt::Display for GameSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A tabletop campaign owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Campaign identifier.
    pub id: CampaignId,
    /// Owning user.
    #[serde(rename = "userId")]
    pub owner: UserId,
    /// Display name.
    pub name: String,
    /// Game system.
    pub system: GameSystem,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// CARE earned across all sessions of this campaign.
    #[serde(default)]
    pub care_earned: u64,
    /// When the campaign was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Campaign {
    /// Create a campaign with no description and no CARE earned.
    pub fn new(
        id: CampaignId,
        owner: UserId,
        name: impl Into<String>,
        system: GameSystem,
    ) -> Self {
        Self {
            id,
            owner,
            name: name.into(),
            system,
            description: None,
            care_earned: 0,
            created_at: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the creation timestamp.
    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// The description, treating an empty string as absent.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}
