//! Environment variable lookups.

use rustc_hash::FxHashMap;

/// Vault URL variable.
pub const KEYVAULT_URL: &str = "AZURE_KEYVAULT_URL";

/// Secret name variable.
pub const KEYVAULT_SECRET_NAME: &str = "AZURE_KEYVAULT_SECRET_NAME";

/// Authentication method variable.
pub const AUTH_METHOD: &str = "AZURE_AUTH_METHOD";

/// Client ID variable, shared with the service principal and managed identity paths.
pub const CLIENT_ID: &str = "AZURE_CLIENT_ID";

/// Client secret variable.
pub const CLIENT_SECRET: &str = "AZURE_CLIENT_SECRET";

/// Tenant ID variable.
pub const TENANT_ID: &str = "AZURE_TENANT_ID";

/// User-assigned managed identity variable.
pub const USER_ASSIGNED_ID: &str = "AZURE_USER_ASSIGNED_ID";

/// Debug logging toggle variable.
pub const DEBUG: &str = "AZURE_DEBUG";

/// Literal values accepted as `true` for boolean variables.
const TRUTHY: [&str; 4] = ["true", "1", "yes", "on"];

/// A source of environment variables.
///
/// The process environment is the production source; tests supply a map so
/// nothing mutates global state.
pub trait Environment {
    /// Raw value of `key`, if set.
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key` when set to a non-empty string.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }

    /// Value of `key`, or `default` when unset or empty.
    fn or_default(&self, key: &str, default: &str) -> String {
        self.non_empty(key).unwrap_or_else(|| default.to_string())
    }

    /// Boolean value of `key`, or `default` when unset or empty.
    ///
    /// Matching is exact and case-sensitive: only `true`, `1`, `yes` and `on`
    /// are true. Any other non-empty value is false.
    fn or_default_bool(&self, key: &str, default: bool) -> bool {
        self.non_empty(key)
            .map_or(default, |value| TRUTHY.contains(&value.as_str()))
    }
}

/// Reads from the current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Environment for FxHashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

#[cfg(test)]
pub(crate) fn env_from(pairs: &[(&str, &str)]) -> FxHashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}
