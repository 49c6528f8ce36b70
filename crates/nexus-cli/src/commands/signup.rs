use std::path::Path;

use chrono::Utc;
use colored::Colorize;
use nexus_core::RecordStore;

pub fn run(data: &Path, email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(format!("not a valid email: \"{email}\""));
    }

    let mut store = super::open_store(data)?;
    let user = store
        .create_user(email, Utc::now())
        .map_err(|e| e.to_string())?;

    println!("  {} {}", "Welcome to Nexus Hub,".bold(), user.email);
    println!("  User id: {}", user.id);
    println!("  Start a campaign with: nexus new-campaign <name> --user {}", user.email);
    Ok(())
}
