// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A key-value store kept in a JSON file.
//!
//! The file holds a single flat object of string values. It is rewritten
//! in full on every `set`.

use fixture_gen_api::{ApiError, ApiResult, KeyValueStore};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A `KeyValueStore` persisted to a JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Storage` if the file exists but cannot be read or
    /// does not hold a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> ApiResult<Self> {
        let path: PathBuf = path.into();

        let entries: BTreeMap<String, String> = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| storage_error(&path, &e.to_string()))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No store at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(storage_error(&path, &e.to_string())),
        };

        Ok(Self { path, entries })
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> ApiResult<()> {
        let contents: String = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| storage_error(&self.path, &e.to_string()))?;
        fs::write(&self.path, contents).map_err(|e| storage_error(&self.path, &e.to_string()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ApiError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ApiError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

fn storage_error(path: &Path, message: &str) -> ApiError {
    ApiError::Storage {
        message: format!("{}: {message}", path.display()),
    }
}
