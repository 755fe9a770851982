//! Command-line flags

use clap::Args;

/// Settings accepted on the command line.
///
/// Every field is optional here; environment fallback and required-field
/// checks happen in [`super::Settings`].
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigFlags {
    /// Azure Key Vault URL (required, env: `AZURE_KEYVAULT_URL`)
    #[arg(short = 'v', long = "vault-url", value_name = "URL")]
    pub vault_url: Option<String>,

    /// Secret name to retrieve (required, env: `AZURE_KEYVAULT_SECRET_NAME`)
    #[arg(short = 's', long = "secret", value_name = "NAME")]
    pub secret_name: Option<String>,

    /// Authentication method: default, system-mi, user-mi, service-principal
    /// (env: `AZURE_AUTH_METHOD`)
    #[arg(short = 'a', long = "auth", value_name = "METHOD")]
    pub auth_method: Option<String>,

    /// Client ID for service principal or user-assigned managed identity
    /// (env: `AZURE_CLIENT_ID`)
    #[arg(long)]
    pub client_id: Option<String>,

    /// Client secret for service principal authentication (env: `AZURE_CLIENT_SECRET`)
    #[arg(long)]
    pub client_secret: Option<String>,

    /// Tenant ID for service principal authentication (env: `AZURE_TENANT_ID`)
    #[arg(long)]
    pub tenant_id: Option<String>,

    /// User-assigned managed identity client ID (env: `AZURE_USER_ASSIGNED_ID`)
    #[arg(long)]
    pub user_assigned_id: Option<String>,

    /// Enable debug logging (env: `AZURE_DEBUG`)
    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub debug: Option<bool>,
}
