use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;

use super::{MemoryStore, RecordStore};
use crate::campaign::Campaign;
use crate::error::{StoreError, StoreResult};
use crate::id::{CampaignId, UserId};
use crate::session::Session;
use crate::user::UserProfile;

/// A [`MemoryStore`] mirrored to a pretty-printed JSON file.
///
/// Reads are served from the copy loaded by [`JsonFileStore::open`] or by
/// the last mutation. Every mutation takes an exclusive lock on a sibling
/// `.lock` file, reloads the file, applies the change to the fresh copy,
/// and writes it back through a temporary file and rename. Compare-and-set
/// commits therefore check against what is on disk at commit time, and a
/// failed mutation leaves the file untouched.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let inner = load(&path)?;
        Ok(Self { path, inner })
    }

    fn mutate<T>(
        &mut self,
        op: impl FnOnce(&mut MemoryStore) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let _lock = StoreLock::acquire(&self.path)?;
        let fresh = load(&self.path)?;
        let mut next = fresh.clone();
        match op(&mut next) {
            Ok(out) => {
                self.write(&next)?;
                self.inner = next;
                Ok(out)
            }
            Err(e) => {
                self.inner = fresh;
                Err(e)
            }
        }
    }

    fn write(&self, store: &MemoryStore) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(store).map_err(|e| unavailable(&self.path, e))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| unavailable(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| unavailable(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), "store written");
        Ok(())
    }
}

fn load(path: &Path) -> StoreResult<MemoryStore> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "store file not found, starting empty");
        return Ok(MemoryStore::new());
    }
    let text = fs::read_to_string(path).map_err(|e| unavailable(path, e))?;
    serde_json::from_str(&text).map_err(|e| unavailable(path, e))
}

fn unavailable(path: &Path, e: impl std::fmt::Display) -> StoreError {
    tracing::warn!(path = %path.display(), error = %e, "store I/O failed");
    StoreError::Unavailable(format!("{}: {e}", path.display()))
}

/// Exclusive lock on `<store>.json.lock`, released on drop.
///
/// The lock file itself is left in place: removing it would let a waiting
/// process lock an unlinked file while a third one creates a new one.
struct StoreLock {
    file: File,
}

impl StoreLock {
    fn acquire(path: &Path) -> StoreResult<Self> {
        let lock_path = path.with_extension("json.lock");
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| unavailable(&lock_path, e))?;
        file.lock_exclusive()
            .map_err(|e| unavailable(&lock_path, e))?;
        Ok(Self { file })
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        // Closing the handle releases the lock as well.
        let _ = FileExt::unlock(&self.file);
    }
}

impl RecordStore for JsonFileStore {
    fn user(&self, id: &UserId) -> StoreResult<UserProfile> {
        self.inner.user(id)
    }

    fn user_by_email(&self, email: &str) -> StoreResult<UserProfile> {
        self.inner.user_by_email(email)
    }

    fn campaign(&self, user: &UserId, id: &CampaignId) -> StoreResult<(Campaign, Vec<Session>)> {
        self.inner.campaign(user, id)
    }

    fn campaigns_of(&self, user: &UserId) -> StoreResult<Vec<Campaign>> {
        self.inner.campaigns_of(user)
    }

    fn recent_sessions(&self, user: &UserId, limit: usize) -> StoreResult<Vec<Session>> {
        self.inner.recent_sessions(user, limit)
    }

    fn create_user(&mut self, email: &str, at: DateTime<Utc>) -> StoreResult<UserProfile> {
        self.mutate(|s| s.create_user(email, at))
    }

    fn create_campaign(&mut self, campaign: Campaign) -> StoreResult<()> {
        self.mutate(|s| s.create_campaign(campaign))
    }

    fn commit_user(&mut self, expected: &UserProfile, updated: UserProfile) -> StoreResult<()> {
        self.mutate(|s| s.commit_user(expected, updated))
    }

    fn append_session(&mut self, session: Session) -> StoreResult<()> {
        self.mutate(|s| s.append_session(session))
    }

    fn log_session(
        &mut self,
        session: Session,
        expected: &UserProfile,
        updated: UserProfile,
    ) -> StoreResult<()> {
        self.mutate(|s| s.log_session(session, expected, updated))
    }
}
