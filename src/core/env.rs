//! In-memory environment variable store.
//!
//! User variables can be modified with export/unset and are expanded by the
//! parser. The store is owned by the session and passed in explicitly; there
//! is no ambient global state.

use std::collections::HashMap;

use crate::config::DEFAULT_USER_VARS;
use crate::core::error::EnvironmentError;

/// Session-scoped environment variables.
#[derive(Clone, Debug, Default)]
pub struct EnvStore {
    vars: HashMap<String, String>,
}

impl EnvStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the default variables.
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        for (key, value) in DEFAULT_USER_VARS {
            // Defaults are known-valid names.
            let _ = store.set(key, value);
        }
        store
    }

    /// Check if a variable name is valid.
    ///
    /// Valid names must:
    /// - Not be empty
    /// - Start with a letter or underscore
    /// - Contain only alphanumeric characters and underscores
    pub fn is_valid_name(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    }

    /// Set a variable, validating the name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), EnvironmentError> {
        if !Self::is_valid_name(key) {
            return Err(EnvironmentError::InvalidVariableName);
        }
        self.vars.insert(key.to_string(), value.to_string());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Remove a variable. Removing an absent variable is not an error.
    pub fn unset(&mut self, key: &str) {
        self.vars.remove(key);
    }

    /// All variables as (key, value) pairs, sorted by key.
    pub fn iter_sorted(&self) -> Vec<(&str, &str)> {
        let mut vars: Vec<_> = self
            .vars
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        vars.sort_by_key(|(k, _)| *k);
        vars
    }

    /// Format variables for `export` output.
    pub fn format_export_output(&self) -> Vec<String> {
        let vars = self.iter_sorted();
        if vars.is_empty() {
            return vec!["# No user variables set".to_string()];
        }
        vars.into_iter()
            .map(|(key, value)| format!("declare -x {}=\"{}\"", key, value))
            .collect()
    }
}
