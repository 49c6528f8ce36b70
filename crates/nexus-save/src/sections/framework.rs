//! Section 1: the core framework, including the machine-readable `STATE`
//! object.
//!
//! Inside `STATE`, strings are JSON literals and numbers are bare integers
//! without separators, so the object can be lifted out and parsed.

use super::{MODES, SaveContext, banner};
use crate::format::quoted;

/// The whole of section 1.
pub fn framework(ctx: &SaveContext<'_>) -> String {
    let mut out = banner(&format!(
        "SECTION 1: CORE FRAMEWORK (COMPRESSED - {})",
        ctx.config.compression
    ));
    out.push('\n');
    out.push_str("CORE PHILOSOPHY\n");
    out.push_str(
        "• Safety First • Genuine Care • User Sovereignty • Warmth Always • Accessibility\n\n",
    );
    out.push_str("STATE MANAGER\n");
    out.push_str(&state_object(ctx));
    out.push('\n');
    out.push_str(&mode_system());
    out.push('\n');
    out.push_str(STATIC_TAIL);
    out.push('\n');
    out
}

/// The `STATE = { ... }` object.
pub fn state_object(ctx: &SaveContext<'_>) -> String {
    let user = ctx.snapshot.user();
    let campaign = ctx.snapshot.campaign();

    let modules: Vec<String> = ctx.module_labels().into_iter().map(quoted).collect();
    let modes: Vec<String> = MODES
        .iter()
        .map(|m| format!("    {}: {}", m.key, quoted(m.value)))
        .collect();
    let dragon_name = ctx
        .dragon_name()
        .map(quoted)
        .unwrap_or_else(|| "null".to_string());

    let mut out = String::from("STATE = {\n");
    out.push_str(&format!("  active_modules: [{}],\n", modules.join(", ")));
    out.push_str("  modes: {\n");
    out.push_str(&modes.join(",\n"));
    out.push_str("\n  },\n");

    out.push_str("  user_profile: {\n");
    out.push_str(&format!("    email: {},\n", quoted(&user.email)));
    out.push_str(&format!("    careBalance: {},\n", user.care_balance));
    out.push_str(&format!(
        "    eggStatus: {},\n",
        quoted(user.egg_status().as_str())
    ));
    out.push_str(&format!("    dragonName: {dragon_name}\n"));
    out.push_str("  },\n");

    out.push_str("  session: {\n");
    out.push_str(&format!(
        "    campaignId: {},\n",
        quoted(campaign.id.as_str())
    ));
    out.push_str(&format!("    campaignName: {},\n", quoted(&campaign.name)));
    out.push_str(&format!(
        "    campaignSystem: {},\n",
        quoted(campaign.system.label())
    ));
    out.push_str(&format!("    totalSessions: {},\n", ctx.total_sessions()));
    out.push_str(&format!("    careEarned: {}\n", campaign.care_earned));
    out.push_str("  },\n");

    out.push_str("  persistent_data: {\n");
    out.push_str(&format!(
        "    lastSessionDate: {},\n",
        quoted(&ctx.last_session())
    ));
    out.push_str(&format!("    nexusHubUrl: {}\n", quoted(&ctx.config.hub_url)));
    out.push_str("  }\n");
    out.push_str("}\n");
    out
}

fn mode_system() -> String {
    let mut out = String::from("MODE SYSTEM\n");
    for mode in MODES {
        let label = if mode.key == "roleplay" {
            format!("{} Mode", mode.label)
        } else {
            mode.label.to_string()
        };
        out.push_str(&format!(
            "{label}: [{}] - Currently: {}\n",
            mode.options, mode.value
        ));
    }
    out
}

const STATIC_TAIL: &str = r#"COMMAND ROUTER
"/summarize" • "/expand" • "/context" • "Show STATE" • "Update Profile:"
• "Activate Module:" • "Deactivate Module:" • "Show SAVE_CODE" • "Activate Nexus"
• "Log session" • "View campaigns" • "Check CARE balance"

MODULE SYSTEM (Schema v1.1)
── MODULE: [Name] ──
Style | Purpose | Concept | Problem | Assist | Real-world functions
| Commands | State Fields | Progress Log | TLDR

SAVE_CODE FORMAT
Active Modules • Modes • Progress Summary • Next Steps • Context Notes • TLDR

CORE BEHAVIOR
Warm-concise, genuine validation, steady presence, supportive.
Connected to Nexus Hub database for persistent storage.
"#;
