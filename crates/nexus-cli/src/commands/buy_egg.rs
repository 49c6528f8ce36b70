use std::path::Path;

use colored::Colorize;
use nexus_core::progression::{INCUBATION_SESSIONS, purchase_egg};
use nexus_core::{NexusResult, RecordStore, UserProfile};

pub fn run(data: &Path, email: &str) -> Result<(), String> {
    let mut store = super::open_store(data)?;
    let user = super::load_user(&store, email)?;
    let updated = buy(&mut store, &user).map_err(|e| e.to_string())?;

    println!(
        "  {} Log {INCUBATION_SESSIONS} sessions to hatch your dragon.",
        "🥚 Your Ember Egg is now incubating!".bold()
    );
    println!(
        "  Balance: {} CARE",
        nexus_save::cards::balance(updated.care_balance)
    );
    Ok(())
}

/// Purchase and commit in one step; returns the committed profile.
fn buy(store: &mut impl RecordStore, user: &UserProfile) -> NexusResult<UserProfile> {
    let updated = purchase_egg(user)?;
    store.commit_egg_purchase(user, updated.clone())?;
    Ok(updated)
}
