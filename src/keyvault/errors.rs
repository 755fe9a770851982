//! Key Vault errors.

use thiserror::Error;

/// Errors raised by [`VaultClient`](super::VaultClient).
#[derive(Debug, Error)]
pub enum KeyVaultError {
    /// Secret names are 1-127 alphanumerics and dashes.
    #[error("invalid secret name {0:?}: use 1-127 alphanumeric characters and dashes")]
    InvalidSecretName(String),

    /// The secrets client rejected its configuration, e.g. the vault URL.
    #[error(transparent)]
    Client(azure_core::Error),

    /// Authentication or the secret request failed.
    #[error(transparent)]
    Request(azure_core::Error),
}
