use std::path::Path;

use chrono::Utc;
use colored::Colorize;
use nexus_core::{Campaign, CampaignId, GameSystem, RecordStore};

pub fn run(
    data: &Path,
    email: &str,
    name: &str,
    system: &str,
    description: Option<&str>,
) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("campaign name cannot be empty".into());
    }

    let mut store = super::open_store(data)?;
    let user = super::load_user(&store, email)?;

    let mut campaign = Campaign::new(CampaignId::new(), user.id, name, GameSystem::parse(system))
        .with_created_at(Utc::now());
    if let Some(description) = description {
        campaign = campaign.with_description(description);
    }
    let id = campaign.id.clone();
    let icon = campaign.system.icon();
    store
        .create_campaign(campaign)
        .map_err(|e| e.to_string())?;

    println!("  {} {icon} '{name}'", "Created campaign".bold());
    println!("  Campaign id: {id}");
    Ok(())
}
