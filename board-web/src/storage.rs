//! Durable storage for the bearer token.

use gloo_storage::{LocalStorage, Storage};
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::config::FrontendConfig;

/// Failure to write to durable storage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("failed to write `{key}` to local storage: {reason}")]
    Write { key: String, reason: String },
}

/// Where the session token survives page reloads.
///
/// Reads and removals are best effort: a token that cannot be read is treated
/// as absent, and a token that cannot be removed will be overwritten by the
/// next login.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn remove(&self);
}

/// Browser `localStorage`, storing the token as a raw string under one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTokenStorage {
    key: String,
}

impl LocalTokenStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn from_config(config: &FrontendConfig) -> Self {
        Self::new(config.token_storage_key.clone())
    }
}

impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Option<String> {
        match LocalStorage::raw().get_item(&self.key) {
            Ok(token) => token.filter(|value| !value.is_empty()),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %describe(&err), "could not read token");
                None
            }
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(&self.key, token)
            .map_err(|err| StorageError::Write {
                key: self.key.clone(),
                reason: describe(&err),
            })
    }

    fn remove(&self) {
        if let Err(err) = LocalStorage::raw().remove_item(&self.key) {
            tracing::warn!(key = %self.key, error = %describe(&err), "could not remove token");
        }
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
