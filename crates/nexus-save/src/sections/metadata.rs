//! Metadata footer and closing restoration notes.

use super::{SaveContext, banner};
use crate::format::{self, RULE};

/// The footer. Ends the document.
pub fn metadata(ctx: &SaveContext<'_>) -> String {
    let cfg = ctx.config;
    let tag = cfg.tag();

    let mut out = banner("METADATA");
    out.push_str(&format!(
        "Format: {tag} | Compression: {} | Self-Bootstrapping: ✓\n",
        cfg.compression.to_lowercase()
    ));
    out.push_str(&format!(
        "Nexus Hub Integration: ✓ | Campaign ID: {}\n",
        ctx.snapshot.campaign_id()
    ));
    out.push_str(&format!(
        "Generated: {} | Compatible: {}\n",
        format::timestamp(ctx.snapshot.generated_at()),
        cfg.compatible.join(", ")
    ));
    out.push_str(RULE);
    out.push_str("\n\n🔥 RESTORATION NOTES 🔥\n");
    out.push_str("This SAVE_CODE contains full campaign state and can be pasted into ANY AI chat.\n");
    out.push_str(
        "The AI will reconstruct your campaign, track your progress, and continue your story.\n",
    );
    out.push_str("Your data remains in Nexus Hub database - this code is for portability.\n");
    out.push_str(&format!(
        "To continue in Nexus Hub: Visit {} and login.\n",
        cfg.hub_url
    ));
    out.push_str(&format!(
        "To continue in any AI: Paste this code and say \"Restore Nexus from {tag}\"\n\n"
    ));
    out.push_str("The hearth is always ready. 🐉\n");
    out.push_str(RULE);
    out.push('\n');
    out
}
