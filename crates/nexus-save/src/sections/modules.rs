//! Section 2: one detail block per active module.

use nexus_core::progression::EGG_PRICE;
use nexus_core::{CareAction, Dragon, EggState, Module};

use super::{BULLET, HEART, NO_SESSIONS_LOGGED, SaveContext, banner, bullets};
use crate::format::{self, TRACKER_RECAP_LIMIT, plural, truncate};

/// A module detail block. Every module renders through this one schema so
/// the blocks stay structurally identical.
#[derive(Debug, Clone)]
pub struct ModuleBlock {
    /// Header name.
    pub heading: &'static str,
    /// Interaction style.
    pub style: &'static str,
    /// One-line purpose.
    pub purpose: String,
    /// Titled groups of free-form data lines.
    pub data: Vec<(String, Vec<String>)>,
    /// Command phrase and what it does.
    pub commands: Vec<(&'static str, &'static str)>,
    /// State field names and values.
    pub state_fields: Vec<(&'static str, String)>,
    /// Progress log line.
    pub progress_log: &'static str,
    /// One-line summary.
    pub tldr: String,
}

impl ModuleBlock {
    /// Render the block, without a trailing newline.
    pub fn render(&self) -> String {
        let mut out = format!("── MODULE: {} ──\n", self.heading);
        out.push_str(&format!("Style: {}\n", self.style));
        out.push_str(&format!("Purpose: {}\n", self.purpose));

        for (title, lines) in &self.data {
            out.push_str(&format!("\n{title}:\n"));
            for line in lines {
                out.push_str(line);
                out.push('\n');
            }
        }

        out.push_str("\nCommands:\n");
        for (phrase, effect) in &self.commands {
            out.push_str(&format!("{BULLET}\"{phrase}\" → {effect}\n"));
        }

        out.push_str("\nState Fields:\n");
        for (name, value) in &self.state_fields {
            out.push_str(&format!("{BULLET}{name}: {value}\n"));
        }

        out.push_str(&format!("\nProgress Log:\n{}\n", self.progress_log));
        out.push_str(&format!("\nTLDR:\n{}", self.tldr));
        out
    }
}

/// The whole of section 2. Blocks follow `active_modules` exactly.
pub fn modules(ctx: &SaveContext<'_>) -> String {
    let blocks: Vec<String> = ctx
        .derived
        .active_modules
        .iter()
        .map(|m| module_block(ctx, *m).render())
        .collect();

    let mut out = banner("SECTION 2: ACTIVE MODULES");
    out.push('\n');
    out.push_str(&blocks.join("\n\n"));
    out.push_str("\n\n");
    out
}

/// Build the block for one module.
pub fn module_block(ctx: &SaveContext<'_>, module: Module) -> ModuleBlock {
    match module {
        Module::CampaignManager => campaign_manager(ctx),
        Module::CareEconomy => care_economy(ctx),
        Module::DragonCompanion => dragon_companion(ctx),
    }
}

fn campaign_manager(ctx: &SaveContext<'_>) -> ModuleBlock {
    let campaign = ctx.snapshot.campaign();
    let user = ctx.snapshot.user();
    let total = ctx.total_sessions();

    let campaign_data = bullets([
        format!("Name: {}", campaign.name),
        format!("System: {}", campaign.system),
        format!("Description: {}", campaign.description().unwrap_or("None")),
        format!("CARE Earned: {}", campaign.care_earned),
        format!("Total Sessions: {total}"),
        format!(
            "Created: {}",
            format::date_or_unknown(campaign.created_at.as_ref())
        ),
    ]);

    let mut recent: Vec<String> = ctx
        .snapshot
        .sessions()
        .iter()
        .take(3)
        .map(|s| {
            let mut line = format!(
                "{BULLET}{}: +{} CARE",
                format::date_or_unknown(s.session_date.as_ref()),
                s.care_earned
            );
            if let Some(recap) = s.recap() {
                line.push_str(&format!(" - {}", truncate(recap, TRACKER_RECAP_LIMIT)));
            }
            line
        })
        .collect();
    if recent.is_empty() {
        recent.push(format!("{BULLET}{NO_SESSIONS_LOGGED}"));
    }

    ModuleBlock {
        heading: Module::CampaignManager.heading(),
        style: "Tracker",
        purpose: format!("Track {} campaign progress and sessions", campaign.system),
        data: vec![
            ("Campaign Data".to_string(), campaign_data),
            ("Recent Sessions".to_string(), recent),
        ],
        commands: vec![
            ("Log new session", "Opens session logger"),
            ("View all sessions", "Shows full history"),
            ("Export campaign", "Generates portable SAVE_CODE"),
        ],
        state_fields: vec![
            ("campaignId", campaign.id.to_string()),
            ("userId", user.id.to_string()),
            ("lastSession", ctx.last_session()),
        ],
        progress_log: "Campaign active and tracked in Nexus Hub database.",
        tldr: format!(
            "{} campaign with {total} session{} and {} CARE earned.",
            campaign.system,
            plural(total),
            campaign.care_earned
        ),
    }
}

fn care_economy(ctx: &SaveContext<'_>) -> ModuleBlock {
    let user = ctx.snapshot.user();
    let campaign = ctx.snapshot.campaign();
    let balance = user.care_balance;

    let mut player = vec![
        format!("Current Balance: {balance} {HEART}"),
        format!(
            "Total Earned (This Campaign): {} {HEART}",
            campaign.care_earned
        ),
        format!("Ember Egg Status: {}", user.egg_status()),
    ];
    match &user.egg {
        EggState::Incubating { sessions_remaining } => {
            player.push(format!("Sessions Until Hatch: {sessions_remaining}"));
        }
        EggState::Hatched(_) => {
            player.push(format!(
                "Dragon Name: {}",
                ctx.dragon_name().unwrap_or("Unnamed")
            ));
        }
        EggState::None => {}
    }

    let actions = bullets(CareAction::ALL.iter().map(|a| {
        let soon = if a.is_available() { "" } else { " (coming soon)" };
        format!("{}: +{} CARE{soon}", a.label(), a.reward())
    }));

    let outlook = match &user.egg {
        EggState::None if balance < EGG_PRICE => {
            format!("{} more needed for Ember Egg.", EGG_PRICE - balance)
        }
        EggState::None => "Ember Egg ready to purchase.".to_string(),
        EggState::Incubating { sessions_remaining } => {
            format!("Egg incubating ({sessions_remaining} sessions to hatch).")
        }
        EggState::Hatched(_) => "Dragon companion active!".to_string(),
    };

    ModuleBlock {
        heading: Module::CareEconomy.heading(),
        style: "Hybrid",
        purpose: "Track CARE currency earnings and spending".to_string(),
        data: vec![
            ("Player CARE Data".to_string(), bullets(player)),
            ("CARE Earning Actions".to_string(), actions),
        ],
        commands: vec![
            ("Show CARE balance", "Displays current balance"),
            ("CARE history", "Shows earning breakdown"),
            ("Check egg status", "Shows progress to hatching"),
        ],
        state_fields: vec![
            ("careBalance", balance.to_string()),
            ("eggStatus", user.egg_status().to_string()),
        ],
        progress_log: "Economy active. Player earning CARE through collaborative play.",
        tldr: format!("{balance} CARE available. {outlook}"),
    }
}

fn dragon_companion(ctx: &SaveContext<'_>) -> ModuleBlock {
    let user = ctx.snapshot.user();
    let unhatched = Dragon::default();
    let dragon = user.egg.dragon().unwrap_or(&unhatched);

    let profile = bullets([
        format!("Name: {}", dragon.name().unwrap_or("Unnamed Dragon")),
        "Status: Hatched and Active".to_string(),
        format!("Bonded Player: {}", user.email),
        format!(
            "Hatched On: {}",
            format::date_or_unknown(dragon.hatched_at.as_ref())
        ),
    ]);

    let mut traits = bullets(
        ["Brave", "Playful", "Protective", "Curious"]
            .iter()
            .map(|t| format!("{t}: Developing")),
    );
    traits.push(String::new());
    traits.push("(Traits evolve based on your actions in sessions)".to_string());

    ModuleBlock {
        heading: Module::DragonCompanion.heading(),
        style: "Roleplay",
        purpose: "Your loyal dragon companion across all campaigns".to_string(),
        data: vec![
            ("Dragon Profile".to_string(), profile),
            ("Personality Traits".to_string(), traits),
        ],
        commands: vec![
            ("Talk to dragon", "Interact with companion"),
            ("Dragon profile", "View full stats"),
            ("Name dragon: [name]", "Set dragon's name"),
        ],
        state_fields: vec![
            ("dragonId", dragon.id().unwrap_or("none").to_string()),
            ("dragonName", dragon.name().unwrap_or("Unnamed").to_string()),
        ],
        progress_log: "Dragon companion active and travels with player across all campaigns.",
        tldr: format!(
            "{} is your loyal companion across the multiverse.",
            dragon.name().unwrap_or("Your dragon")
        ),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use nexus_core::{Campaign, CampaignId, GameSystem, Session, SessionId, UserId, UserProfile};

    use super::*;
    use crate::config::SaveConfig;
    use crate::snapshot::SaveSnapshot;

    fn snapshot(balance: u64, egg: EggState, sessions: Vec<Session>) -> SaveSnapshot {
        let user = UserProfile::new(UserId::from("u1"), "hero@example.com")
            .with_balance(balance)
            .with_egg(egg);
        let campaign = Campaign::new(
            CampaignId::from("c1"),
            user.id.clone(),
            "Embercliff",
            GameSystem::Fantasy,
        );
        SaveSnapshot::new(
            user,
            campaign,
            sessions,
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        )
    }

    fn session(id: &str, day: u32, recap: Option<&str>) -> Session {
        let s = Session::new(
            SessionId::from(id),
            CampaignId::from("c1"),
            UserId::from("u1"),
            Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
        )
        .with_care(10);
        match recap {
            Some(r) => s.with_recap(r),
            None => s,
        }
    }

    fn render(snap: &SaveSnapshot) -> String {
        let derived = snap.derive();
        let config = SaveConfig::default();
        modules(&SaveContext {
            snapshot: snap,
            derived: &derived,
            config: &config,
        })
    }

    fn hatched(name: Option<&str>) -> EggState {
        EggState::Hatched(Dragon {
            id: None,
            name: name.map(String::from),
            hatched_at: None,
        })
    }

    #[test]
    fn blocks_follow_active_modules() {
        let out = render(&snapshot(0, EggState::None, vec![]));
        let tracker = out.find("── MODULE: Campaign Manager ──").unwrap();
        let economy = out.find("── MODULE: CARE Economy ──").unwrap();
        assert!(tracker < economy);
        assert!(!out.contains("── MODULE: Dragon Companion ──"));

        let out = render(&snapshot(0, hatched(Some("Ash")), vec![]));
        let economy = out.find("── MODULE: CARE Economy ──").unwrap();
        let dragon = out.find("── MODULE: Dragon Companion ──").unwrap();
        assert!(economy < dragon);
    }

    #[test]
    fn tracker_truncates_recaps_at_fifty() {
        let long = "x".repeat(51);
        let exact = "y".repeat(50);
        let out = render(&snapshot(
            0,
            EggState::None,
            vec![session("a", 2, Some(&long)), session("b", 1, Some(&exact))],
        ));
        assert!(out.contains(&format!("• 2024-01-02: +10 CARE - {}...\n", "x".repeat(50))));
        assert!(out.contains(&format!("• 2024-01-01: +10 CARE - {exact}\n")));
    }

    #[test]
    fn tracker_lists_at_most_three_sessions() {
        let sessions = (1..=5).map(|d| session(&format!("s{d}"), d, None)).collect();
        let out = render(&snapshot(0, EggState::None, sessions));
        assert!(out.contains("• 2024-01-05: +10 CARE\n"));
        assert!(out.contains("• 2024-01-03: +10 CARE\n"));
        assert!(!out.contains("• 2024-01-02: +10 CARE\n"));
        assert!(out.contains("5 sessions and 0 CARE earned."));
    }

    #[test]
    fn undated_session_is_listed_as_unknown() {
        let mut undated = session("old", 1, Some("Before dates were kept"));
        undated.session_date = None;
        let out = render(&snapshot(0, EggState::None, vec![undated, session("a", 3, None)]));
        let dated = out.find("• 2024-01-03: +10 CARE\n").unwrap();
        let unknown = out
            .find("• Unknown: +10 CARE - Before dates were kept\n")
            .unwrap();
        assert!(dated < unknown);
        assert!(out.contains("• lastSession: 2024-01-03\n"));
    }

    #[test]
    fn tracker_placeholders() {
        let out = render(&snapshot(0, EggState::None, vec![]));
        assert!(out.contains("• Description: None\n"));
        assert!(out.contains("• Created: Unknown\n"));
        assert!(out.contains("• No sessions logged yet\n"));
        assert!(out.contains("• lastSession: No sessions yet\n"));
        assert!(out.contains("Fantasy campaign with 0 sessions and 0 CARE earned."));
    }

    #[test]
    fn economy_lines_depend_on_egg() {
        let out = render(&snapshot(
            250,
            EggState::Incubating {
                sessions_remaining: 6,
            },
            vec![],
        ));
        assert!(out.contains("• Sessions Until Hatch: 6\n"));
        assert!(!out.contains("Dragon Name:"));
        assert!(out.contains("250 CARE available. Egg incubating (6 sessions to hatch)."));

        let out = render(&snapshot(250, EggState::None, vec![]));
        assert!(!out.contains("Sessions Until Hatch"));
        assert!(out.contains("250 CARE available. 750 more needed for Ember Egg."));

        let out = render(&snapshot(1500, EggState::None, vec![]));
        assert!(out.contains("1500 CARE available. Ember Egg ready to purchase."));
    }

    #[test]
    fn earning_actions_listed() {
        let out = render(&snapshot(0, EggState::None, vec![]));
        assert!(out.contains("• Session Attendance: +10 CARE\n"));
        assert!(out.contains("• NFC Verified Attendance: +5 CARE (coming soon)\n"));
    }

    #[test]
    fn unnamed_dragon_placeholders() {
        let out = render(&snapshot(0, hatched(None), vec![]));
        assert!(out.contains("• Dragon Name: Unnamed\n"));
        assert!(out.contains("• Name: Unnamed Dragon\n"));
        assert!(out.contains("• dragonName: Unnamed\n"));
        assert!(out.contains("• dragonId: none\n"));
        assert!(out.contains("• Hatched On: Unknown\n"));
        assert!(out.contains("Your dragon is your loyal companion across the multiverse."));
    }

    #[test]
    fn block_schema_order() {
        let snap = snapshot(0, EggState::None, vec![]);
        let derived = snap.derive();
        let config = SaveConfig::default();
        let ctx = SaveContext {
            snapshot: &snap,
            derived: &derived,
            config: &config,
        };
        let block = module_block(&ctx, Module::CareEconomy).render();
        let order = [
            "Style:",
            "Purpose:",
            "Player CARE Data:",
            "Commands:",
            "State Fields:",
            "Progress Log:",
            "TLDR:",
        ];
        let positions: Vec<usize> = order.iter().map(|k| block.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!block.ends_with('\n'));
    }
}
