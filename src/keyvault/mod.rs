//! Azure Key Vault secrets.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use azure_core::credentials::TokenCredential;
use azure_security_keyvault_secrets::SecretClient;
use mockall::automock;
use tracing::debug;
use zeroize::Zeroizing;

mod errors;

pub use errors::KeyVaultError;

const MAX_SECRET_NAME_LEN: usize = 127;

/// Something that can read secret values.
#[automock]
#[async_trait]
pub trait SecretReader: Send + Sync {
    /// Read the latest value of secret `name`. `None` means the vault holds
    /// the secret without a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is malformed, no token can be obtained,
    /// or the vault refuses the request.
    async fn read_secret(&self, name: &str) -> Result<Option<Zeroizing<String>>, KeyVaultError>;
}

/// Reads secrets from one vault.
pub struct VaultClient {
    vault_url: String,
    client: SecretClient,
}

impl fmt::Debug for VaultClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaultClient")
            .field("vault_url", &self.vault_url)
            .finish_non_exhaustive()
    }
}

impl VaultClient {
    /// Create a client for the vault at `vault_url`,
    /// e.g. `https://my-vault.vault.azure.net/`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyVaultError::Client`] if the secrets client rejects the URL.
    pub fn new(
        vault_url: &str,
        credential: Arc<dyn TokenCredential>,
    ) -> Result<Self, KeyVaultError> {
        let client = SecretClient::new(vault_url, credential, None).map_err(KeyVaultError::Client)?;

        Ok(Self {
            vault_url: vault_url.to_string(),
            client,
        })
    }

    /// The vault this client reads from.
    #[must_use]
    pub fn vault_url(&self) -> &str {
        &self.vault_url
    }
}

#[async_trait]
impl SecretReader for VaultClient {
    async fn read_secret(&self, name: &str) -> Result<Option<Zeroizing<String>>, KeyVaultError> {
        validate_secret_name(name)?;

        debug!(vault_url = %self.vault_url, secret_name = name, "requesting secret");

        let secret = self
            .client
            .get_secret(name, "", None)
            .await
            .map_err(KeyVaultError::Request)?
            .into_body()
            .await
            .map_err(KeyVaultError::Request)?;

        Ok(secret.value.map(Zeroizing::new))
    }
}

fn validate_secret_name(name: &str) -> Result<(), KeyVaultError> {
    let valid = !name.is_empty()
        && name.len() <= MAX_SECRET_NAME_LEN
        && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-');

    if valid {
        Ok(())
    } else {
        Err(KeyVaultError::InvalidSecretName(name.to_string()))
    }
}
