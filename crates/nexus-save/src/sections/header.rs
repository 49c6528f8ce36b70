//! Header line and restoration instructions.

use super::SaveContext;
use crate::format::{self, RULE};

/// `SAVE_CODE v2.0.1: {campaign} | {YYYY-MM-DD}`
pub fn header(ctx: &SaveContext<'_>) -> String {
    format!(
        "{}: {} | {}\n",
        ctx.config.tag(),
        ctx.snapshot.campaign().name,
        format::date(ctx.snapshot.generated_at())
    )
}

/// How to restore the document. Identical for every snapshot.
pub fn restoration(ctx: &SaveContext<'_>) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str("🔄 SELF-BOOTSTRAPPING SAVE CODE (Enhanced)\n");
    out.push_str(&format!("Compression: {}\n\n", ctx.config.compression));
    out.push_str("RESTORATION:\n");
    out.push_str("1. Paste this entire block into any AI chat (Claude, ChatGPT, Gemini, etc.)\n");
    out.push_str(&format!(
        "2. Say: \"Restore Nexus from {}\"\n",
        ctx.config.tag()
    ));
    out.push_str("3. AI will reconstruct your campaign with full state\n\n");
    out
}
