//! Authentication methods and the parameters each one needs.

use std::{fmt, str::FromStr, sync::Arc};

use azure_core::credentials::{Secret, TokenCredential};
use azure_identity::{
    ClientSecretCredential, DefaultAzureCredential, ManagedIdentityCredential,
    ManagedIdentityCredentialOptions, UserAssignedId,
};
use tracing::debug;

use crate::{
    config::{ClientSecret, EffectiveConfig},
    credential::{CredentialError, CredentialHandle},
};

/// A supported authentication method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    /// The default credential chain.
    Default,

    /// The host's system-assigned managed identity.
    SystemManagedIdentity,

    /// A user-assigned managed identity.
    UserManagedIdentity,

    /// A service principal with a client secret.
    ServicePrincipal,
}

impl AuthMethod {
    /// Every method, in help-text order.
    pub const ALL: [Self; 4] = [
        Self::Default,
        Self::SystemManagedIdentity,
        Self::UserManagedIdentity,
        Self::ServicePrincipal,
    ];

    /// The name accepted by `--auth`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::SystemManagedIdentity => "system-mi",
            Self::UserManagedIdentity => "user-mi",
            Self::ServicePrincipal => "service-principal",
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMethod {
    type Err = CredentialError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == value)
            .ok_or_else(|| CredentialError::UnsupportedMethod(value.to_string()))
    }
}

/// A validated authentication method together with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialStrategy {
    /// The default credential chain.
    Default,

    /// The host's system-assigned managed identity.
    SystemAssigned,

    /// A user-assigned managed identity.
    UserAssigned {
        /// Client ID of the identity.
        client_id: String,
    },

    /// A service principal with a client secret.
    ServicePrincipal {
        /// Directory the application is registered in.
        tenant_id: String,

        /// Application (client) ID.
        client_id: String,

        /// Client secret.
        client_secret: ClientSecret,
    },
}

impl CredentialStrategy {
    /// Pick the strategy for `config.auth_method` and check that its
    /// parameters are present.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown method or when a parameter the method
    /// requires is missing.
    pub fn from_config(config: &EffectiveConfig) -> Result<Self, CredentialError> {
        debug!(auth_method = %config.auth_method, "creating credential for auth method");

        let method = config.auth_method.parse::<AuthMethod>().inspect_err(|_| {
            debug!(auth_method = %config.auth_method, "unsupported authentication method");
        })?;

        match method {
            AuthMethod::Default => {
                debug!("using DefaultAzureCredential");
                Ok(Self::Default)
            }
            AuthMethod::SystemManagedIdentity => {
                debug!("using system-assigned managed identity");
                Ok(Self::SystemAssigned)
            }
            AuthMethod::UserManagedIdentity => {
                if let Some(id) = &config.user_assigned_id {
                    debug!(user_assigned_id = %id, "using user-assigned managed identity");
                    Ok(Self::UserAssigned {
                        client_id: id.clone(),
                    })
                } else if let Some(id) = &config.client_id {
                    debug!(client_id = %id, "using user-assigned managed identity");
                    Ok(Self::UserAssigned {
                        client_id: id.clone(),
                    })
                } else {
                    debug!("user-assigned managed identity requires a client ID or user-assigned ID");
                    Err(CredentialError::MissingManagedIdentityId)
                }
            }
            AuthMethod::ServicePrincipal => match (
                &config.tenant_id,
                &config.client_id,
                &config.client_secret,
            ) {
                (Some(tenant_id), Some(client_id), Some(client_secret)) => {
                    debug!(%client_id, %tenant_id, "using service principal");
                    Ok(Self::ServicePrincipal {
                        tenant_id: tenant_id.clone(),
                        client_id: client_id.clone(),
                        client_secret: client_secret.clone(),
                    })
                }
                (tenant_id, client_id, client_secret) => {
                    debug!(
                        client_id_provided = client_id.is_some(),
                        client_secret_provided = client_secret.is_some(),
                        tenant_id_provided = tenant_id.is_some(),
                        "service principal authentication missing required parameters"
                    );
                    Err(CredentialError::MissingServicePrincipalParameters)
                }
            },
        }
    }

    /// The method this strategy implements.
    #[must_use]
    pub const fn method(&self) -> AuthMethod {
        match self {
            Self::Default => AuthMethod::Default,
            Self::SystemAssigned => AuthMethod::SystemManagedIdentity,
            Self::UserAssigned { .. } => AuthMethod::UserManagedIdentity,
            Self::ServicePrincipal { .. } => AuthMethod::ServicePrincipal,
        }
    }

    /// Construct the credential with the Azure identity library. No
    /// requests are made; the default chain probes its sources on first use.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Identity`] if the identity library rejects
    /// the parameters, e.g. a tenant ID with illegal characters.
    pub fn build(self) -> Result<CredentialHandle, CredentialError> {
        let method = self.method();

        let credential: Arc<dyn TokenCredential> = match self {
            Self::Default => DefaultAzureCredential::new()?,
            Self::SystemAssigned => ManagedIdentityCredential::new(None)?,
            Self::UserAssigned { client_id } => {
                let mut options = ManagedIdentityCredentialOptions::default();
                options.user_assigned_id = Some(UserAssignedId::ClientId(client_id));

                ManagedIdentityCredential::new(Some(options))?
            }
            Self::ServicePrincipal {
                tenant_id,
                client_id,
                client_secret,
            } => ClientSecretCredential::new(
                &tenant_id,
                client_id,
                Secret::new(client_secret.expose().to_string()),
                None,
            )?,
        };

        Ok(CredentialHandle::new(method, credential))
    }
}
