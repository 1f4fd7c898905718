use std::{collections::HashMap, path::PathBuf, sync::Arc};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use models::user::User;

use crate::errors::StoreError;

/// The whole persisted table: the last identifier value minted plus every
/// live record keyed by identifier. Serde field names are the on-disk format.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UserTable {
    pub increment: u64,
    pub list: HashMap<String, User>,
}

/// File-backed user store.
///
/// The entire table lives in memory behind one reader/writer lock and the
/// backing JSON file is rewritten in full on every mutation, while the write
/// guard is still held. All operations are synchronous with no await points,
/// so once a mutation starts it always runs to completion — a transport
/// timeout or dropped connection can only lose the response, never leave a
/// half-applied table.
///
/// Identifiers are the decimal form of a monotonic counter; they are never
/// reused, even after a delete.
#[derive(Clone)]
pub struct UserStore {
    inner: Arc<RwLock<UserTable>>,
    file_path: PathBuf,
}

impl UserStore {
    /// Open the store from an existing table file.
    ///
    /// A missing or unreadable file is an `Io` error and a file that does not
    /// parse as a [`UserTable`] is a `Decode` error. There is no
    /// empty-table fallback: seeding the file is an operator action.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self, StoreError> {
        let file_path = path.into();
        let bytes = std::fs::read(&file_path)?;
        let table: UserTable = serde_json::from_slice(&bytes).map_err(StoreError::Decode)?;
        info!(
            path = %file_path.display(),
            users = table.list.len(),
            increment = table.increment,
            "user table loaded"
        );
        Ok(Self {
            inner: Arc::new(RwLock::new(table)),
            file_path,
        })
    }

    /// Serialize the whole table and overwrite the backing file. Called with
    /// the write guard held so a mutation and its persisted image cannot
    /// interleave with another writer.
    fn save(&self, table: &UserTable) -> Result<(), StoreError> {
        let data = serde_json::to_vec(table).map_err(|e| {
            error!(path = %self.file_path.display(), error = %e, "cannot encode user table");
            StoreError::Encode(e)
        })?;
        std::fs::write(&self.file_path, data).map_err(|e| {
            error!(path = %self.file_path.display(), error = %e, "cannot persist user table");
            StoreError::Io(e)
        })?;
        Ok(())
    }

    /// Mint the next identifier, insert the record and persist.
    pub fn create_user(&self, user: User) -> Result<String, StoreError> {
        let mut table = self.inner.write();
        table.increment += 1;
        let id = table.increment.to_string();
        table.list.insert(id.clone(), user);
        self.save(&table)?;
        Ok(id)
    }

    /// Return a copy of the record for `id`, or `UserNotFound`.
    pub fn get_user(&self, id: &str) -> Result<User, StoreError> {
        let table = self.inner.read();
        table.list.get(id).cloned().ok_or(StoreError::UserNotFound)
    }

    /// Replace the record stored under an existing `id` and persist.
    /// Updating an absent identifier is `UserNotFound`, never an insert.
    pub fn update_user(&self, id: &str, user: User) -> Result<(), StoreError> {
        let mut table = self.inner.write();
        if !table.list.contains_key(id) {
            return Err(StoreError::UserNotFound);
        }
        table.list.insert(id.to_string(), user);
        self.save(&table)
    }

    /// Remove the record stored under `id` and persist. The identifier is
    /// retired for good; later creates keep counting upward.
    pub fn delete_user(&self, id: &str) -> Result<(), StoreError> {
        let mut table = self.inner.write();
        if table.list.remove(id).is_none() {
            return Err(StoreError::UserNotFound);
        }
        self.save(&table)
    }

    /// Snapshot copy of all records keyed by identifier. Iteration order is
    /// not meaningful.
    pub fn list_users(&self) -> HashMap<String, User> {
        let table = self.inner.read();
        table.list.clone()
    }
}
