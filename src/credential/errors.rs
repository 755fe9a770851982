//! Credential selection errors.

use thiserror::Error;

/// Errors raised while selecting or constructing a credential.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The authentication method name is not recognised.
    #[error("unsupported authentication method: {0}")]
    UnsupportedMethod(String),

    /// `user-mi` was selected without an identity to use.
    #[error("user-assigned managed identity requires --client-id or --user-assigned-id")]
    MissingManagedIdentityId,

    /// `service-principal` was selected without its full parameter set.
    #[error("service principal authentication requires --client-id, --client-secret, and --tenant-id")]
    MissingServicePrincipalParameters,

    /// The identity library rejected the parameters.
    #[error(transparent)]
    Identity(#[from] azure_core::Error),
}
