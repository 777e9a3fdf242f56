//! Saving and restoring the simulation through a string key-value store.
//!
//! Reads never fail: a missing, unreadable or corrupt slot yields the default
//! (empty, level) state. Write failures are logged and dropped.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::Storage;

use crate::consts::{MAX_ANGLE, STORAGE_KEY};
use crate::model::SimulationState;
use crate::util::cwarn;

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("saved state is malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A durable string store with the simulation's load/save on top.
pub trait StateStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistError>;

    fn load(&self) -> SimulationState {
        let Some(raw) = self.get_item(STORAGE_KEY) else {
            return SimulationState::default();
        };
        match decode(&raw) {
            Ok(state) => state,
            Err(e) => {
                cwarn(&format!("ignoring saved seesaw: {e}"));
                SimulationState::default()
            }
        }
    }

    fn save(&self, state: &SimulationState) {
        let result = encode(state).and_then(|raw| self.set_item(STORAGE_KEY, &raw));
        if let Err(e) = result {
            cwarn(&format!("could not save seesaw: {e}"));
        }
    }
}

pub fn encode(state: &SimulationState) -> Result<String, PersistError> {
    Ok(serde_json::to_string(state)?)
}

pub fn decode(raw: &str) -> Result<SimulationState, PersistError> {
    let mut state: SimulationState = serde_json::from_str(raw)?;
    state.angle = state.angle.clamp(-MAX_ANGLE, MAX_ANGLE);
    Ok(state)
}

/// `window.localStorage`.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, PersistError> {
        let win = web_sys::window().ok_or(PersistError::Unavailable)?;
        match win.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            _ => Err(PersistError::Unavailable),
        }
    }
}

impl StateStore for LocalStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| PersistError::Write(format!("{:?}", e)))
    }
}

/// Session-only store. Clones share the same slots.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl StateStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistError> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// localStorage when the browser grants it, otherwise memory for this session.
pub fn open_store() -> Box<dyn StateStore> {
    match LocalStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            cwarn(&format!("{e}; progress will not survive a reload"));
            Box::new(MemoryStore::default())
        }
    }
}
