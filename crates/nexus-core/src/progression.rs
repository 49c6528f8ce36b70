//! The CARE economy and Ember Egg progression rules.
//!
//! All functions here are pure: they read a [`UserProfile`] and return
//! derived values or a new profile. Committing a new profile is the
//! caller's job (see [`crate::store::RecordStore::commit_egg_purchase`]).
//!
//! The egg lifecycle only moves forward:
//!
//! ```text
//! None --purchase_egg--> Incubating { 10 } --record_session x10--> Hatched
//! ```

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::EngineError;
use crate::session::Session;
use crate::user::{Dragon, EggState, UserProfile};

/// Price of an Ember Egg in CARE.
pub const EGG_PRICE: u64 = 1000;

/// Logged sessions an egg needs before it hatches.
pub const INCUBATION_SESSIONS: u32 = 10;

/// A capability block in the exported SAVE_CODE, gated by progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    /// Campaign and session tracking. Always active.
    CampaignManager,
    /// CARE balance and egg progress. Always active.
    CareEconomy,
    /// The hatched dragon. Active only once the egg has hatched.
    DragonCompanion,
}

impl Module {
    /// Name listed under active modules.
    pub fn label(self) -> &'static str {
        match self {
            Self::CampaignManager => "Nexus Hub Campaign Manager",
            Self::CareEconomy => "CARE Economy",
            Self::DragonCompanion => "Dragon Companion",
        }
    }

    /// Name used in the module block header.
    pub fn heading(self) -> &'static str {
        match self {
            Self::CampaignManager => "Campaign Manager",
            Self::CareEconomy => "CARE Economy",
            Self::DragonCompanion => "Dragon Companion",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Progress toward the next egg milestone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EggProgress {
    /// Percentage in `[0, 100]`.
    pub percent: f64,
    /// Whether the user can take the next step right now.
    pub can_advance: bool,
}

/// Progress toward the next milestone for the user's current egg state.
pub fn egg_progress(user: &UserProfile) -> EggProgress {
    match &user.egg {
        EggState::None => EggProgress {
            percent: (user.care_balance as f64 / EGG_PRICE as f64 * 100.0).min(100.0),
            can_advance: user.care_balance >= EGG_PRICE,
        },
        EggState::Incubating { sessions_remaining } => {
            let done = i64::from(INCUBATION_SESSIONS) - i64::from(*sessions_remaining);
            let percent = done as f64 / f64::from(INCUBATION_SESSIONS) * 100.0;
            EggProgress {
                percent: percent.clamp(0.0, 100.0),
                can_advance: false,
            }
        }
        EggState::Hatched(_) => EggProgress {
            percent: 100.0,
            can_advance: false,
        },
    }
}

/// Buy an Ember Egg.
///
/// Requires no egg and at least [`EGG_PRICE`] CARE. The status check comes
/// first, so a user who already has an egg gets `InvalidState` whatever
/// their balance. Returns the post-purchase profile; `user` is untouched.
pub fn purchase_egg(user: &UserProfile) -> Result<UserProfile, EngineError> {
    if user.egg != EggState::None {
        return Err(EngineError::InvalidState(format!(
            "cannot purchase an Ember Egg while egg status is {}",
            user.egg_status()
        )));
    }
    if user.care_balance < EGG_PRICE {
        return Err(EngineError::InsufficientBalance {
            balance: user.care_balance,
            required: EGG_PRICE,
        });
    }
    Ok(UserProfile {
        care_balance: user.care_balance - EGG_PRICE,
        egg: EggState::Incubating {
            sessions_remaining: INCUBATION_SESSIONS,
        },
        ..user.clone()
    })
}

/// Apply a newly logged session to the owner's profile.
///
/// Credits the session's CARE and, while incubating, counts one session
/// toward hatching. When the count reaches zero the egg hatches; the
/// dragon's id is derived from the session that hatched it and its
/// hatch time is the session date.
pub fn record_session(user: &UserProfile, session: &Session) -> UserProfile {
    let egg = match &user.egg {
        EggState::Incubating { sessions_remaining } => {
            let remaining = sessions_remaining.saturating_sub(1);
            if remaining == 0 {
                EggState::Hatched(Dragon {
                    id: Some(format!("dragon-{}", session.id)),
                    name: None,
                    hatched_at: session.session_date,
                })
            } else {
                EggState::Incubating {
                    sessions_remaining: remaining,
                }
            }
        }
        other => other.clone(),
    };
    UserProfile {
        care_balance: user.care_balance.saturating_add(session.care_earned),
        egg,
        ..user.clone()
    }
}

/// Give the hatched dragon a name.
pub fn name_dragon(user: &UserProfile, name: &str) -> Result<UserProfile, EngineError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EngineError::InvalidState(
            "dragon name cannot be empty".into(),
        ));
    }
    let EggState::Hatched(dragon) = &user.egg else {
        return Err(EngineError::InvalidState(format!(
            "no dragon to name while egg status is {}",
            user.egg_status()
        )));
    };
    Ok(UserProfile {
        egg: EggState::Hatched(Dragon {
            name: Some(name.to_string()),
            ..dragon.clone()
        }),
        ..user.clone()
    })
}

/// Modules included in the SAVE_CODE, in emission order.
pub fn active_modules(user: &UserProfile) -> Vec<Module> {
    let mut modules = vec![Module::CampaignManager, Module::CareEconomy];
    if matches!(user.egg, EggState::Hatched(_)) {
        modules.push(Module::DragonCompanion);
    }
    modules
}

/// The single recommended next action. First matching rule wins.
pub fn next_step_text(user: &UserProfile) -> String {
    if user.care_balance < EGG_PRICE {
        format!(
            "Earn {} more CARE to get Ember Egg",
            EGG_PRICE - user.care_balance
        )
    } else if user.egg == EggState::None {
        "Purchase Ember Egg!".to_string()
    } else if let EggState::Incubating { sessions_remaining } = user.egg {
        format!("Play {sessions_remaining} more sessions to hatch dragon")
    } else {
        "Adventure with your dragon companion!".to_string()
    }
}

/// Everything the SAVE_CODE needs that is computed rather than stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedState {
    /// Active modules in emission order.
    pub active_modules: Vec<Module>,
    /// Progress toward the next egg milestone.
    pub egg_progress: EggProgress,
    /// The recommended next action.
    pub next_step: String,
    /// Date of the most recent session, if any.
    pub last_session_date: Option<DateTime<Utc>>,
}

/// Derive display values for a user and their campaign's sessions.
///
/// `sessions` must already be ordered most-recent-first; the first entry
/// is taken as the last session played.
pub fn derive(user: &UserProfile, sessions: &[Session]) -> DerivedState {
    DerivedState {
        active_modules: active_modules(user),
        egg_progress: egg_progress(user),
        next_step: next_step_text(user),
        last_session_date: sessions.first().and_then(|s| s.session_date),
    }
}
