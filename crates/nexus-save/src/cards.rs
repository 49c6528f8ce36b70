//! Short plain-text cards for dashboards.
//!
//! Unlike the SAVE_CODE body, numbers here get thousands separators and
//! recaps are cut at [`CARD_PREVIEW_LIMIT`]. Each card is a few lines with
//! no trailing newline.

use nexus_core::progression::{EGG_PRICE, INCUBATION_SESSIONS, egg_progress};
use nexus_core::{Campaign, EggState, Session, UserProfile};

use crate::format::{self, CARD_PREVIEW_LIMIT, thousands, truncate};
use crate::sections::HEART;

/// Width of the egg progress bar, in cells.
const BAR_WIDTH: usize = 20;

/// A CARE balance for display, e.g. `1,250`.
pub fn balance(care: u64) -> String {
    thousands(care)
}

/// `[██████░░░░...]` for a percentage in `[0, 100]`.
pub fn progress_bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    )
}

/// The Ember Egg card for the user's current egg state.
pub fn egg_card(user: &UserProfile) -> String {
    let progress = egg_progress(user);
    let bar = progress_bar(progress.percent);
    match &user.egg {
        EggState::None => {
            let call = if progress.can_advance {
                "Hatch Your Egg! 🔥"
            } else {
                "Keep logging sessions to earn more CARE"
            };
            format!(
                "🥚 Ember Egg\n\
                 Collect {} CARE to hatch your dragon companion\n\
                 {bar} {}/{}\n\
                 {call}",
                thousands(EGG_PRICE),
                user.care_balance,
                thousands(EGG_PRICE)
            )
        }
        EggState::Incubating { sessions_remaining } => {
            let done = INCUBATION_SESSIONS.saturating_sub(*sessions_remaining);
            format!(
                "🥚✨ Egg Incubating\n\
                 Your dragon is growing! {sessions_remaining} more sessions until it hatches.\n\
                 {bar} {done}/{INCUBATION_SESSIONS} sessions\n\
                 The egg pulses with warmth..."
            )
        }
        EggState::Hatched(dragon) => format!(
            "🐉 Your Dragon Has Hatched!\n\
             {}\n\
             Your loyal companion across all campaigns",
            dragon.name().unwrap_or("Your Dragon")
        ),
    }
}

/// A campaign card: icon, name, system, description preview, CARE.
pub fn campaign_card(campaign: &Campaign) -> String {
    let mut out = format!(
        "{} {} ({})\n",
        campaign.system.icon(),
        campaign.name,
        campaign.system
    );
    if let Some(description) = campaign.description() {
        out.push_str(&truncate(description, CARD_PREVIEW_LIMIT));
        out.push('\n');
    }
    out.push_str(&format!(
        "CARE earned: {} {HEART}",
        thousands(campaign.care_earned)
    ));
    out
}

/// A session card: date and reward, then the recap preview if any.
pub fn session_card(session: &Session) -> String {
    let mut out = format!(
        "{}  +{} CARE",
        format::date_or_unknown(session.session_date.as_ref()),
        thousands(session.care_earned)
    );
    if let Some(recap) = session.recap() {
        out.push('\n');
        out.push_str(&truncate(recap, CARD_PREVIEW_LIMIT));
    }
    out
}

/// One-line portal door for the multiverse listing.
pub fn portal_door(campaign: &Campaign) -> String {
    format!(
        "{} {} · {} · {} CARE · Portal Active",
        campaign.system.icon(),
        campaign.name,
        campaign.system,
        thousands(campaign.care_earned)
    )
}

/// `N active`, for the campaign count badge.
pub fn campaign_count(n: usize) -> String {
    format!("{n} active")
}
