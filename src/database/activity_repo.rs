use std::sync::Arc;

use tokio::sync::{RwLock, RwLockWriteGuard};

use crate::database::seed_data;
use crate::models::Directory;

/// Shared handle to the in-memory activity directory.
///
/// Cloning is cheap; every clone sees the same directory. Nothing is written to
/// disk, so state resets with the process.
#[derive(Clone)]
pub struct ActivityStore {
    directory: Arc<RwLock<Directory>>,
}

impl ActivityStore {
    pub fn new(directory: Directory) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_data::seed_directory())
    }

    /// Owned copy of the current directory, taken under the read lock.
    pub async fn snapshot(&self) -> Directory {
        self.directory.read().await.clone()
    }

    /// Exclusive access for a check-then-mutate step.
    pub async fn write(&self) -> RwLockWriteGuard<'_, Directory> {
        self.directory.write().await
    }
}
