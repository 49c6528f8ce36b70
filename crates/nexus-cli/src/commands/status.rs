use std::path::Path;

use colored::Colorize;
use nexus_core::RecordStore;
use nexus_core::progression::next_step_text;
use nexus_save::cards;

/// Sessions shown under "Recent sessions".
const RECENT_SESSIONS: usize = 5;

pub fn run(data: &Path, email: &str) -> Result<(), String> {
    let store = super::open_store(data)?;
    let user = super::load_user(&store, email)?;
    let campaigns = store.campaigns_of(&user.id).map_err(|e| e.to_string())?;
    let sessions = store
        .recent_sessions(&user.id, RECENT_SESSIONS)
        .map_err(|e| e.to_string())?;

    println!("  {}", user.email.bold());
    println!(
        "  {} {} ♥️",
        "CARE balance:".bold(),
        cards::balance(user.care_balance)
    );
    println!();
    print_card(&cards::egg_card(&user));
    println!();

    println!(
        "  {} {}",
        "Campaigns".bold(),
        cards::campaign_count(campaigns.len()).dimmed()
    );
    if campaigns.is_empty() {
        println!("  No campaigns yet.");
    }
    for campaign in &campaigns {
        print_card(&cards::campaign_card(campaign));
        println!("    {}", format!("id: {}", campaign.id).dimmed());
    }
    println!();

    println!("  {}", "Recent sessions".bold());
    if sessions.is_empty() {
        println!("  No sessions logged yet.");
    }
    for session in &sessions {
        print_card(&cards::session_card(session));
    }
    println!();

    println!("  {} {}", "Next:".bold(), next_step_text(&user));
    Ok(())
}

fn print_card(card: &str) {
    for line in card.lines() {
        println!("    {line}");
    }
}
