use crate::utils::errors::{CertCheckError, Result};
use crate::vault::auth::AccessToken;
use crate::vault::API_VERSION;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct KeyVaultErrorResponse {
    error: Option<KeyVaultError>,
}

#[derive(Debug, Deserialize)]
struct KeyVaultError {
    code: Option<String>,
    message: Option<String>,
}

/// Authenticated client for the Key Vault data plane
pub struct KeyVaultClient {
    client: Client,
    vault_uri: String,
    token: AccessToken,
}

impl KeyVaultClient {
    pub fn new(client: Client, vault_uri: &str, token: AccessToken) -> Self {
        Self {
            client,
            vault_uri: vault_uri.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Request URL for the data-plane path made of `segments`.
    ///
    /// Each segment is percent-encoded, so a `/` inside a name stays part of that name.
    pub fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.vault_uri).map_err(|e| {
            CertCheckError::Config(format!("Invalid vault URI '{}': {e}", self.vault_uri))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                CertCheckError::Config(format!("Invalid vault URI '{}'", self.vault_uri))
            })?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut().append_pair("api-version", API_VERSION);

        Ok(url)
    }

    /// GET an absolute URL and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("Making GET request to: {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(self.token.secret())
            .send()
            .await?;

        tracing::debug!("Response status: {}", response.status());
        self.handle_response(response).await
    }

    /// Handle HTTP response from Key Vault
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let error = serde_json::from_str::<KeyVaultErrorResponse>(&body)
            .ok()
            .and_then(|r| r.error);
        let message = error
            .as_ref()
            .and_then(|e| e.message.clone())
            .unwrap_or_else(|| {
                if body.is_empty() {
                    "Unknown error".to_string()
                } else {
                    body.clone()
                }
            });

        if status == StatusCode::NOT_FOUND {
            Err(CertCheckError::NotFound(message))
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let code = error.and_then(|e| e.code).unwrap_or_default();
            Err(CertCheckError::Auth(format!(
                "Access denied ({status}) {code}: {message}"
            )))
        } else {
            Err(CertCheckError::Service {
                status: status.as_u16(),
                message,
            })
        }
    }
}
