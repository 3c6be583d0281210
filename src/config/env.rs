//! Environment variable overrides

use std::collections::HashMap;

use crate::config::schema::{self, FieldSpec};

/// Snapshot of the environment variables bound to schema fields
///
/// Taken once when the loader is created so loading never reads process
/// state midway. Empty values are dropped and leave the default in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    values: HashMap<&'static str, String>,
}

impl EnvOverrides {
    /// Read the bound variables from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build overrides from a lookup function, keyed by variable name
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let values = schema::bound_env_vars()
            .filter_map(|name| {
                lookup(name)
                    .filter(|value| !value.trim().is_empty())
                    .map(|value| (name, value))
            })
            .collect();
        Self { values }
    }

    /// Value overriding the given field, if its variable is set
    pub fn value_for(&self, field: &FieldSpec) -> Option<&str> {
        field
            .env
            .and_then(|name| self.values.get(name))
            .map(String::as_str)
    }

    /// Names of the variables that are set, sorted
    pub fn applied(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.values.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvOverrides
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars: HashMap<String, String> = iter
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.into()))
            .collect();
        Self::from_lookup(|name| vars.get(name).cloned())
    }
}
