//! Configuration resolution
//!
//! Flags win over environment variables, which win over static defaults.
//! [`Settings`] is the merged view; [`EffectiveConfig`] is the validated,
//! immutable configuration handed to the rest of the run.

use thiserror::Error;

pub mod env;
mod flags;
mod secret;

pub use env::{Environment, ProcessEnvironment};
pub use flags::ConfigFlags;
pub use secret::ClientSecret;

/// Authentication method used when none is configured.
pub const DEFAULT_AUTH_METHOD: &str = "default";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more required flags have no value from either source.
    #[error("required flag(s) {} not set", quoted(.0))]
    MissingRequired(Vec<&'static str>),
}

fn quoted(names: &[&'static str]) -> String {
    names
        .iter()
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Flags merged with environment values and static defaults.
///
/// Unset values are empty strings; nothing is validated yet.
#[derive(Clone, PartialEq, Eq)]
#[expect(missing_docs, reason = "fields mirror the flags of the same name")]
pub struct Settings {
    pub vault_url: String,
    pub secret_name: String,
    pub auth_method: String,
    pub client_id: String,
    pub client_secret: ClientSecret,
    pub tenant_id: String,
    pub user_assigned_id: String,
    pub debug: bool,
}

impl Settings {
    /// Merge explicitly supplied flags over `source`.
    pub fn resolve(flags: ConfigFlags, source: &impl Environment) -> Self {
        let pick = |flag: Option<String>, key: &str, default: &str| {
            flag.unwrap_or_else(|| source.or_default(key, default))
        };

        Self {
            vault_url: pick(flags.vault_url, env::KEYVAULT_URL, ""),
            secret_name: pick(flags.secret_name, env::KEYVAULT_SECRET_NAME, ""),
            auth_method: pick(flags.auth_method, env::AUTH_METHOD, DEFAULT_AUTH_METHOD),
            client_id: pick(flags.client_id, env::CLIENT_ID, ""),
            client_secret: ClientSecret::new(pick(flags.client_secret, env::CLIENT_SECRET, "")),
            tenant_id: pick(flags.tenant_id, env::TENANT_ID, ""),
            user_assigned_id: pick(flags.user_assigned_id, env::USER_ASSIGNED_ID, ""),
            debug: flags
                .debug
                .unwrap_or_else(|| source.or_default_bool(env::DEBUG, false)),
        }
    }

    /// Check required fields and produce the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] naming every required flag
    /// that is empty, in alphabetical order.
    pub fn into_effective(self) -> Result<EffectiveConfig, ConfigError> {
        let mut missing = Vec::new();

        if self.secret_name.is_empty() {
            missing.push("secret");
        }

        if self.vault_url.is_empty() {
            missing.push("vault-url");
        }

        if !missing.is_empty() {
            return Err(ConfigError::MissingRequired(missing));
        }

        let client_secret = if self.client_secret.expose().is_empty() {
            None
        } else {
            Some(self.client_secret)
        };

        Ok(EffectiveConfig {
            vault_url: self.vault_url,
            secret_name: self.secret_name,
            auth_method: self.auth_method,
            client_id: non_empty(self.client_id),
            client_secret,
            tenant_id: non_empty(self.tenant_id),
            user_assigned_id: non_empty(self.user_assigned_id),
            debug: self.debug,
        })
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("vault_url", &self.vault_url)
            .field("secret_name", &self.secret_name)
            .field("auth_method", &self.auth_method)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret)
            .field("tenant_id", &self.tenant_id)
            .field("user_assigned_id", &self.user_assigned_id)
            .field("debug", &self.debug)
            .finish()
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// Validated configuration for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// Key Vault URL, e.g. `https://my-vault.vault.azure.net/`.
    pub vault_url: String,

    /// Name of the secret to fetch.
    pub secret_name: String,

    /// Raw authentication method name; parsed by the credential selector.
    pub auth_method: String,

    /// Service principal client ID, or user-assigned identity alias.
    pub client_id: Option<String>,

    /// Service principal client secret.
    pub client_secret: Option<ClientSecret>,

    /// Service principal tenant.
    pub tenant_id: Option<String>,

    /// User-assigned managed identity client ID.
    pub user_assigned_id: Option<String>,

    /// Emit debug logging to stderr.
    pub debug: bool,
}

impl EffectiveConfig {
    /// Configuration for `vault_url`/`secret_name` with every optional
    /// setting left at its default.
    #[must_use]
    pub fn new(vault_url: impl Into<String>, secret_name: impl Into<String>) -> Self {
        Self {
            vault_url: vault_url.into(),
            secret_name: secret_name.into(),
            auth_method: DEFAULT_AUTH_METHOD.to_string(),
            client_id: None,
            client_secret: None,
            tenant_id: None,
            user_assigned_id: None,
            debug: false,
        }
    }
}
