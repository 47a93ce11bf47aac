//! Environment variable source used by config loading and the HTTP handlers.
//!
//! Handlers never touch `std::env` directly; they go through `EnvSource` held in
//! `AppState`, so tests can swap the live process environment for a fixed map.
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Read-only view over a set of environment variables.
///
/// Implementations must be cheap to share (`AppState` keeps them in an `Arc`).
pub trait EnvSource: Debug + Send + Sync + 'static {
    /// Value of `name`, if set.
    fn get(&self, name: &str) -> Option<String>;

    /// Every variable, keyed by name.
    ///
    /// `BTreeMap` keeps the key order stable, so the same environment always
    /// serializes to the same bytes.
    fn snapshot(&self) -> BTreeMap<String, String>;
}

/// The live process environment, re-read on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }

    fn snapshot(&self) -> BTreeMap<String, String> {
        // vars() panics on non-UTF-8 entries; lossy conversion keeps /config alive.
        std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }
}

/// A fixed set of variables, for tests.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct FixedEnv {
    vars: BTreeMap<String, String>,
}

#[cfg(test)]
impl FixedEnv {
    pub fn new<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
impl EnvSource for FixedEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn snapshot(&self) -> BTreeMap<String, String> {
        self.vars.clone()
    }
}
