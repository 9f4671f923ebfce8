use crate::models::UserId;
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing::{error, warn};

/// Best-effort persistence of the single user identifier.
///
/// Failures never reach the caller: a read that fails is an absent
/// identifier, and a write that fails is logged and forgotten.
pub trait IdentifierStore: Send + Sync {
    fn get(&self) -> Option<UserId>;
    fn set(&self, id: &UserId);
    fn clear(&self);
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredIdentity {
    user_id: UserId,
}

pub struct FileIdentifierStore {
    path: PathBuf,
}

impl FileIdentifierStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IdentifierStore for FileIdentifierStore {
    fn get(&self) -> Option<UserId> {
        match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice::<StoredIdentity>(&bytes) {
                Ok(stored) => Some(stored.user_id),
                Err(err) => {
                    warn!("ignoring unreadable identifier file: {err}");
                    None
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                error!("failed to read identifier file: {err}");
                None
            }
        }
    }

    fn set(&self, id: &UserId) {
        let stored = StoredIdentity {
            user_id: id.clone(),
        };
        let result = serde_json::to_vec_pretty(&stored)
            .map_err(io::Error::from)
            .and_then(|payload| fs::write(&self.path, payload));
        if let Err(err) = result {
            error!("failed to persist identifier: {err}");
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => error!("failed to clear identifier: {err}"),
        }
    }
}

#[derive(Default)]
pub struct MemoryIdentifierStore {
    slot: Mutex<Option<UserId>>,
}

impl MemoryIdentifierStore {
    pub fn with_id(id: UserId) -> Self {
        Self {
            slot: Mutex::new(Some(id)),
        }
    }
}

impl IdentifierStore for MemoryIdentifierStore {
    fn get(&self) -> Option<UserId> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn set(&self, id: &UserId) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(id.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}
