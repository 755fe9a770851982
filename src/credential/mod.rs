//! Credential selection
//!
//! Maps the configured authentication method onto exactly one credential
//! from the Azure identity library.

use std::{fmt, sync::Arc};

use azure_core::credentials::TokenCredential;

use crate::config::EffectiveConfig;

mod errors;
mod strategy;

pub use errors::CredentialError;
pub use strategy::{AuthMethod, CredentialStrategy};

/// The credential constructed for a run.
#[derive(Clone)]
pub struct CredentialHandle {
    method: AuthMethod,
    credential: Arc<dyn TokenCredential>,
}

impl CredentialHandle {
    pub(crate) fn new(method: AuthMethod, credential: Arc<dyn TokenCredential>) -> Self {
        Self { method, credential }
    }

    /// The method this credential was built for.
    #[must_use]
    pub const fn method(&self) -> AuthMethod {
        self.method
    }

    /// The credential, for handing to a service client.
    #[must_use]
    pub fn token_credential(&self) -> Arc<dyn TokenCredential> {
        Arc::clone(&self.credential)
    }
}

impl fmt::Debug for CredentialHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialHandle")
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

/// Select and construct the credential `config` asks for.
///
/// The method and its parameters are validated before the identity library
/// is involved, so a misconfiguration is reported the same way whatever the
/// environment holds.
///
/// # Errors
///
/// Returns an error for an unknown method, missing parameters, or parameters
/// the identity library rejects. Nothing is sent over the network.
pub fn select_credential(config: &EffectiveConfig) -> Result<CredentialHandle, CredentialError> {
    CredentialStrategy::from_config(config)?.build()
}
