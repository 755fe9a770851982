//! Fetch one secret and write it out.

use std::io::Write;

use tracing::debug;
use zeroize::Zeroizing;

use crate::{
    config::EffectiveConfig,
    credential::select_credential,
    errors::RunError,
    keyvault::{SecretReader, VaultClient},
};

/// Authenticate as `config` asks and return the value of the configured
/// secret.
///
/// # Errors
///
/// Returns [`RunError`] with context for the step that failed.
pub async fn fetch_secret(config: &EffectiveConfig) -> Result<Zeroizing<String>, RunError> {
    debug!(
        vault_url = %config.vault_url,
        secret_name = %config.secret_name,
        auth_method = %config.auth_method,
        debug = config.debug,
        "starting azkeyget"
    );

    let credential = select_credential(config).inspect_err(|error| {
        debug!(%error, "failed to create credential");
    })?;
    debug!(method = %credential.method(), "created credential");

    let client = VaultClient::new(&config.vault_url, credential.token_credential()).map_err(
        |error| {
            debug!(%error, "failed to create Key Vault client");
            RunError::Client(error)
        },
    )?;
    debug!(vault_url = client.vault_url(), "created Key Vault client");

    read_secret(&client, &config.secret_name).await
}

/// Read secret `name` through `reader`, treating a secret without a value as
/// an error.
///
/// # Errors
///
/// Returns [`RunError::GetSecret`] if the read fails and
/// [`RunError::NoValue`] if the secret has no value.
pub async fn read_secret(
    reader: &dyn SecretReader,
    name: &str,
) -> Result<Zeroizing<String>, RunError> {
    let value = reader.read_secret(name).await.map_err(|source| {
        debug!(secret_name = name, error = %source, "failed to retrieve secret");
        RunError::GetSecret {
            name: name.to_string(),
            source,
        }
    })?;
    debug!(secret_name = name, "retrieved secret");

    value.ok_or_else(|| {
        debug!(secret_name = name, "secret has no value");
        RunError::NoValue(name.to_string())
    })
}

/// Write `value` to `out` exactly as stored, without a trailing newline.
///
/// # Errors
///
/// Returns [`RunError::Output`] if writing or flushing fails.
pub fn write_secret(out: &mut impl Write, value: &str) -> Result<(), RunError> {
    out.write_all(value.as_bytes())
        .and_then(|()| out.flush())
        .map_err(RunError::Output)
}
