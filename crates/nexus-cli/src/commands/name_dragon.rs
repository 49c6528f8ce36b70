use std::path::Path;

use colored::Colorize;
use nexus_core::progression::name_dragon;
use nexus_core::{NexusResult, RecordStore, UserProfile};

pub fn run(data: &Path, email: &str, name: &str) -> Result<(), String> {
    let mut store = super::open_store(data)?;
    let user = super::load_user(&store, email)?;
    rename(&mut store, &user, name).map_err(|e| e.to_string())?;

    println!("  🐉 {} is ready to adventure.", name.trim().bold());
    Ok(())
}

fn rename(store: &mut impl RecordStore, user: &UserProfile, name: &str) -> NexusResult<()> {
    let updated = name_dragon(user, name)?;
    store.commit_user(user, updated)?;
    Ok(())
}
