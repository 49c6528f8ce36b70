use std::path::Path;

use chrono::Utc;
use nexus_core::{CampaignId, RecordStore};
use nexus_save::{SaveCompiler, SaveConfig, SaveSnapshot};

pub fn run(
    data: &Path,
    email: &str,
    campaign: &str,
    output: Option<&Path>,
    hub_url: Option<&str>,
    compression: Option<&str>,
) -> Result<(), String> {
    let store = super::open_store(data)?;
    let user = super::load_user(&store, email)?;
    let (campaign, sessions) = store
        .campaign(&user.id, &CampaignId::from(campaign))
        .map_err(|e| e.to_string())?;

    let mut config = SaveConfig::default();
    if let Some(url) = hub_url {
        config = config.with_hub_url(url);
    }
    if let Some(label) = compression {
        config = config.with_compression(label.to_uppercase());
    }
    let snapshot = SaveSnapshot::new(user, campaign, sessions, Utc::now());
    let compiler = SaveCompiler::new(config);
    let content = compiler.compile(&snapshot);
    tracing::info!(
        campaign = %snapshot.campaign_id(),
        version = %compiler.config().format_version,
        compression = %compiler.config().compression,
        bytes = content.len(),
        "compiled save code"
    );

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}
