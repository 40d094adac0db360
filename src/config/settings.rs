use crate::cli::args::Cli;
use crate::config::sources::{first_non_empty, EnvSource, ValueSource};
use crate::utils::errors::{CertCheckError, Result};
use secrecy::{ExposeSecret, SecretString};

pub const ENV_VAULT_URI: &str = "AZURE_KEY_VAULT_URI";
pub const ENV_CLIENT_ID: &str = "AZURE_CLIENT_ID";
pub const ENV_TENANT_ID: &str = "AZURE_TENANT_ID";
pub const ENV_CLIENT_SECRET: &str = "AZURE_CLIENT_SECRET";
pub const ENV_CERT_NAME: &str = "AZURE_KEYVAULT_CERT_NAME";
pub const ENV_AUTHORITY_HOST: &str = "AZURE_AUTHORITY_HOST";

pub const DEFAULT_AUTHORITY_HOST: &str = "https://login.microsoftonline.com";

/// Connection settings merged from command-line flags and the environment
#[derive(Debug)]
pub struct Settings {
    pub vault_uri: String,
    pub client_id: String,
    pub tenant_id: String,
    pub client_secret: SecretString,
    pub cert_name: Option<String>,
    pub authority_host: String,
}

impl Settings {
    /// Resolve every setting, preferring the flag over its environment variable.
    ///
    /// Missing required values are left empty; call [`Settings::validate`] before use.
    pub fn load(cli: &Cli, env: &dyn EnvSource) -> Self {
        let resolve = |flag: &Option<String>, key: &'static str| {
            first_non_empty(&[ValueSource::Flag(flag.as_deref()), ValueSource::Env(key)], env)
        };

        Self {
            vault_uri: resolve(&cli.vault_uri, ENV_VAULT_URI)
                .map(|uri| uri.trim_end_matches('/').to_string())
                .unwrap_or_default(),
            client_id: resolve(&cli.client_id, ENV_CLIENT_ID).unwrap_or_default(),
            tenant_id: resolve(&cli.tenant_id, ENV_TENANT_ID).unwrap_or_default(),
            client_secret: SecretString::from(
                resolve(&cli.client_secret, ENV_CLIENT_SECRET).unwrap_or_default(),
            ),
            cert_name: resolve(&cli.cert_name, ENV_CERT_NAME),
            authority_host: resolve(&cli.authority_host, ENV_AUTHORITY_HOST)
                .unwrap_or_else(|| DEFAULT_AUTHORITY_HOST.to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }

    /// Check that every required value is present
    pub fn validate(&self) -> Result<()> {
        let required = [
            (ENV_VAULT_URI, self.vault_uri.as_str()),
            (ENV_CLIENT_ID, self.client_id.as_str()),
            (ENV_TENANT_ID, self.tenant_id.as_str()),
            (ENV_CLIENT_SECRET, self.client_secret.expose_secret()),
        ];

        for (name, value) in required {
            if value.is_empty() {
                return Err(CertCheckError::Config(format!("{name} is required")));
            }
        }

        Ok(())
    }
}
