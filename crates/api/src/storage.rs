// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence of raw form input.
//!
//! Only the team and time text is kept between sessions; generated
//! schedules are always recomputed. The backing store is injected so the
//! scheduler and its tests never depend on one.

use crate::error::ApiError;
use crate::input::RawInputs;
use std::collections::HashMap;
use tracing::debug;

/// Storage key for the raw team list.
pub const RAW_TEAMS_KEY: &str = "rawTeams";

/// Storage key for the raw kick-off times.
pub const RAW_TIMES_KEY: &str = "rawTimes";

/// A string key-value store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Storage` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, ApiError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Storage` if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ApiError>;
}

/// An in-process store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ApiError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ApiError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Saves the raw form text.
///
/// # Errors
///
/// Returns `ApiError::Storage` if the store rejects a write.
pub fn save_raw_inputs<S>(store: &mut S, inputs: &RawInputs) -> Result<(), ApiError>
where
    S: KeyValueStore + ?Sized,
{
    store.set(RAW_TEAMS_KEY, &inputs.teams)?;
    store.set(RAW_TIMES_KEY, &inputs.times)?;
    debug!("Saved raw form inputs");
    Ok(())
}

/// Loads the raw form text; missing entries load as empty strings.
///
/// # Errors
///
/// Returns `ApiError::Storage` if the store cannot be read.
pub fn load_raw_inputs<S>(store: &S) -> Result<RawInputs, ApiError>
where
    S: KeyValueStore + ?Sized,
{
    Ok(RawInputs {
        teams: store.get(RAW_TEAMS_KEY)?.unwrap_or_default(),
        times: store.get(RAW_TIMES_KEY)?.unwrap_or_default(),
    })
}
