use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use nexus_core::RecordStore;
use nexus_save::cards;

pub fn run(data: &Path, email: &str) -> Result<(), String> {
    let store = super::open_store(data)?;
    let user = super::load_user(&store, email)?;
    let campaigns = store.campaigns_of(&user.id).map_err(|e| e.to_string())?;

    if campaigns.is_empty() {
        println!("  No portals yet. Create a campaign to open one.");
        return Ok(());
    }

    println!("  {}", "Multiverse Portal".bold());
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Portal", "Id"]);
    for campaign in &campaigns {
        table.add_row(vec![cards::portal_door(campaign), campaign.id.to_string()]);
    }

    println!("{table}");
    println!();
    println!("  {} portals", campaigns.len());
    Ok(())
}
