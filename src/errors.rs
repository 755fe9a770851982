//! Run errors.

use std::io;

use thiserror::Error;

use crate::{
    config::ConfigError, credential::CredentialError, keyvault::KeyVaultError,
    logging::TryInitError,
};

/// Anything that ends a run. Printed as `Error: <message>`.
#[derive(Debug, Error)]
pub enum RunError {
    /// Required configuration is missing.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The log subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] TryInitError),

    /// No credential could be selected or constructed.
    #[error("failed to create credential: {0}")]
    Credential(#[source] CredentialError),

    /// The Key Vault client could not be constructed.
    #[error("failed to create client: {0}")]
    Client(#[source] KeyVaultError),

    /// The secret could not be fetched.
    #[error("failed to get secret '{name}': {source}")]
    GetSecret {
        /// Requested secret name.
        name: String,

        /// Why the read failed.
        #[source]
        source: KeyVaultError,
    },

    /// The vault returned the secret without a value.
    #[error("secret '{0}' has no value")]
    NoValue(String),

    /// Writing the secret to stdout failed.
    #[error("failed to write secret: {0}")]
    Output(#[source] io::Error),
}

impl From<CredentialError> for RunError {
    fn from(error: CredentialError) -> Self {
        Self::Credential(error)
    }
}
