use crate::config::Settings;
use crate::utils::errors::{CertCheckError, Result};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: Option<String>,
    error_description: Option<String>,
}

/// Bearer token issued by the identity platform
#[derive(Debug)]
pub struct AccessToken {
    token: SecretString,
}

impl AccessToken {
    pub fn new(token: String) -> Self {
        Self {
            token: SecretString::from(token),
        }
    }

    pub fn secret(&self) -> &str {
        self.token.expose_secret()
    }
}

/// Service principal credential using the OAuth 2.0 client-credentials grant
pub struct ClientSecretCredential {
    client: Client,
    authority_host: String,
    tenant_id: String,
    client_id: String,
    client_secret: SecretString,
}

impl ClientSecretCredential {
    pub fn new(client: Client, settings: &Settings) -> Self {
        Self {
            client,
            authority_host: settings.authority_host.clone(),
            tenant_id: settings.tenant_id.clone(),
            client_id: settings.client_id.clone(),
            client_secret: SecretString::from(
                settings.client_secret.expose_secret().to_string(),
            ),
        }
    }

    /// Token endpoint for the configured tenant
    pub fn token_url(&self) -> String {
        format!(
            "{}/{}/oauth2/v2.0/token",
            self.authority_host, self.tenant_id
        )
    }

    /// Exchange the client secret for an access token valid for `scope`
    pub async fn get_token(&self, scope: &str) -> Result<AccessToken> {
        let url = self.token_url();
        tracing::debug!("Requesting token from: {}", url);

        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.expose_secret()),
            ("scope", scope),
        ];

        let response = self.client.post(&url).form(&form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<TokenErrorResponse>(&body)
                .ok()
                .and_then(|e| e.error_description.or(e.error))
                .unwrap_or(body);
            return Err(CertCheckError::Auth(format!(
                "Client secret authentication failed: {status} - {detail}"
            )));
        }

        let body = response.text().await?;
        let token_response: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            CertCheckError::Auth(format!("Invalid response from identity service: {e}"))
        })?;
        let token = token_response.access_token.ok_or_else(|| {
            CertCheckError::Auth("Invalid response from identity service".to_string())
        })?;

        tracing::info!("Authenticated as client {}", self.client_id);
        Ok(AccessToken::new(token))
    }
}
