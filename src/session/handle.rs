//! Shared session handle
//!
//! Wraps the in-memory tracker state so cloned tool handlers see the same
//! profile, log and split.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::models::FoodCatalog;
use crate::nutrition::NutritionError;

use super::SessionState;

/// Session error types
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unknown food '{0}': not in the catalog")]
    UnknownFood(String),

    #[error("No food log entry at index {index} (log has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Calculation error: {0}")]
    Nutrition(#[from] NutritionError),

    #[error("Session state lock poisoned")]
    Poisoned,
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Clonable handle to the tracker session
#[derive(Clone)]
pub struct Session {
    catalog: Arc<FoodCatalog>,
    state: Arc<Mutex<SessionState>>,
}

impl Session {
    /// Start an empty session against a catalog
    pub fn new(catalog: FoodCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            state: Arc::new(Mutex::new(SessionState::default())),
        }
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    /// Execute a closure with a read view of the state
    pub fn with_state<F, T>(&self, f: F) -> SessionResult<T>
    where
        F: FnOnce(&SessionState, &FoodCatalog) -> SessionResult<T>,
    {
        let state = self.state.lock().map_err(|_| SessionError::Poisoned)?;
        f(&state, &self.catalog)
    }

    /// Execute a closure with mutable access to the state
    pub fn with_state_mut<F, T>(&self, f: F) -> SessionResult<T>
    where
        F: FnOnce(&mut SessionState, &FoodCatalog) -> SessionResult<T>,
    {
        let mut state = self.state.lock().map_err(|_| SessionError::Poisoned)?;
        f(&mut state, &self.catalog)
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> SessionResult<SessionState> {
        self.with_state(|state, _| Ok(state.clone()))
    }
}
