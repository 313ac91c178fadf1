// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable overrides for child processes.
//!
//! ```text
//! inherited (std::env::vars)      Env overrides
//!   GOOS=linux  PATH=...            GOOS=windows
//!          \                        /
//!           +---- merged_over() ---+
//!                      |
//!                      v
//!        GOOS=windows PATH=...   (override wins)
//! ```
//!
//! Keys compare case-insensitively on Windows, exactly on every other platform.

use std::collections::BTreeMap;

/// An environment variable name, compared the way the host OS compares them.
#[derive(Debug, Clone, Eq)]
struct EnvKey(String);

impl EnvKey {
    fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    fn as_str(&self) -> &str {
        &self.0
    }

    #[cfg(windows)]
    fn folded(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    #[cfg(not(windows))]
    fn folded(&self) -> &str {
        &self.0
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.folded().cmp(&other.folded())
    }
}

/// A set of environment variable overrides.
///
/// Applied on top of the inherited environment; on a name clash the override
/// wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: BTreeMap<EnvKey, String>,
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Sets an override, replacing any earlier value for the same name.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = EnvKey::new(key);
        // Remove first so the newest spelling of the key is kept on Windows.
        self.vars.remove(&key);
        self.vars.insert(key, value.into());
        self
    }

    /// Builder-style [`Env::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&EnvKey::new(key)).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Iterates over the overrides in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Resolves the full environment a child would see.
    ///
    /// `inherited` is laid down first and the overrides after it, so with
    /// duplicate names the last assignment (the override) is the one that
    /// survives.
    #[must_use]
    pub fn merged_over<I, K, V>(&self, inherited: I) -> Vec<(String, String)>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut merged: BTreeMap<EnvKey, String> = BTreeMap::new();
        let assignments = inherited
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .chain(self.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        for (key, value) in assignments {
            let key = EnvKey::new(key);
            merged.remove(&key);
            merged.insert(key, value);
        }
        merged.into_iter().map(|(k, v)| (k.0, v)).collect()
    }
}

/// Resolves overrides against the current process environment.
#[must_use]
pub fn current_env_with(overrides: &Env) -> Vec<(String, String)> {
    overrides.merged_over(std::env::vars())
}
