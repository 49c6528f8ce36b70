pub mod buy_egg;
pub mod export;
pub mod log_session;
pub mod name_dragon;
pub mod new_campaign;
pub mod portal;
pub mod signup;
pub mod status;

use std::path::Path;

use nexus_core::{JsonFileStore, RecordStore, UserProfile};

/// Open the data file, creating an empty store if it does not exist yet.
fn open_store(data: &Path) -> Result<JsonFileStore, String> {
    JsonFileStore::open(data).map_err(|e| e.to_string())
}

/// Look up the acting user by email.
fn load_user(store: &JsonFileStore, email: &str) -> Result<UserProfile, String> {
    store.user_by_email(email).map_err(|e| e.to_string())
}
