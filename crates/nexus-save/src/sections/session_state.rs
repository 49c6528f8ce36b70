//! Section 3: the human-readable session state summary.

use nexus_core::EggState;
use nexus_core::progression::EGG_PRICE;

use super::{HEART, MODES, NO_SESSIONS_LOGGED, SaveContext, banner, bullets};
use crate::format::{self, HIGHLIGHT_RECAP_LIMIT, plural, thousands, truncate};

/// Shown in place of a missing recap.
pub const SESSION_LOGGED: &str = "Session logged";

/// The whole of section 3.
pub fn session_state(ctx: &SaveContext<'_>) -> String {
    let mut out = banner("SECTION 3: SESSION STATE");
    out.push('\n');
    out.push_str(&format!(
        "Active Modules: {}\n\n",
        ctx.module_labels().join(" | ")
    ));

    out.push_str("Current Modes:\n");
    for line in bullets(MODES.iter().map(|m| format!("{}: {}", m.label, m.value))) {
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str("\nProgress Summary:\n");
    for line in bullets(progress_summary(ctx)) {
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str("\nNext Steps:\n");
    for line in bullets(next_steps(ctx)) {
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str("\nContext Notes:\n");
    out.push_str(&context_notes(ctx));

    out.push_str("\nSession Highlights:\n");
    out.push_str(&highlights(ctx));

    out.push_str(&format!("\nTLDR:\n{}\n\n", tldr(ctx)));
    out
}

fn progress_summary(ctx: &SaveContext<'_>) -> Vec<String> {
    let campaign = ctx.snapshot.campaign();
    vec![
        format!("Campaign: {} ({})", campaign.name, campaign.system),
        format!("Total Sessions: {}", ctx.total_sessions()),
        format!(
            "CARE Earned (This Campaign): {} {HEART}",
            campaign.care_earned
        ),
        format!(
            "Player CARE Balance: {} {HEART}",
            ctx.snapshot.user().care_balance
        ),
        format!("Last Session: {}", ctx.last_session()),
        format!("Egg Status: {}", ctx.egg_status_line()),
    ]
}

/// The recommended action always comes last.
fn next_steps(ctx: &SaveContext<'_>) -> Vec<String> {
    vec![
        "Continue campaign narrative".to_string(),
        "Log new sessions to earn more CARE".to_string(),
        "Explore other campaigns via Multiverse Portal".to_string(),
        ctx.derived.next_step.clone(),
    ]
}

fn context_notes(ctx: &SaveContext<'_>) -> String {
    let id = ctx.snapshot.campaign_id();
    let mut out =
        String::from("This is a Nexus Hub integrated campaign. All data syncs to database.\n");
    out.push_str(&format!("Campaign ID: {id}\n"));
    out.push_str(&format!("User: {}\n", ctx.snapshot.user().email));
    out.push_str(&format!(
        "Nexus Hub URL: {}\n",
        ctx.config.campaign_url(id.as_str())
    ));
    out.push_str(&format!(
        "Last updated: {}\n",
        format::timestamp(ctx.snapshot.generated_at())
    ));
    out
}

/// Up to three numbered session highlights, most recent first.
pub fn highlights(ctx: &SaveContext<'_>) -> String {
    let sessions = ctx.snapshot.sessions();
    if sessions.is_empty() {
        return format!("{NO_SESSIONS_LOGGED}\n");
    }
    let mut out = String::new();
    for (i, s) in sessions.iter().take(3).enumerate() {
        let text = s
            .recap()
            .map(|r| truncate(r, HIGHLIGHT_RECAP_LIMIT))
            .unwrap_or_else(|| SESSION_LOGGED.to_string());
        out.push_str(&format!(
            "{}. {} - {text} (+{} CARE)\n",
            i + 1,
            format::date_or_unknown(s.session_date.as_ref()),
            s.care_earned
        ));
    }
    out
}

fn tldr(ctx: &SaveContext<'_>) -> String {
    let campaign = ctx.snapshot.campaign();
    let user = ctx.snapshot.user();
    let total = ctx.total_sessions();
    let egg = match &user.egg {
        EggState::Hatched(_) => format!(
            "Dragon companion \"{}\" is active.",
            ctx.dragon_name().unwrap_or("Unnamed")
        ),
        EggState::Incubating { sessions_remaining } => {
            format!("Egg incubating ({sessions_remaining} sessions to hatch).")
        }
        EggState::None => format!("Working toward Ember Egg ({} CARE).", thousands(EGG_PRICE)),
    };
    format!(
        "{} campaign \"{}\" with {total} session{} played, {} CARE earned. \
         Player has {} total CARE. {egg} Ready to continue adventure.",
        campaign.system,
        campaign.name,
        plural(total),
        campaign.care_earned,
        user.care_balance
    )
}
