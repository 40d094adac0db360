use crate::utils::errors::{CertCheckError, Result};
use crate::vault::client::KeyVaultClient;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Certificate metadata as reported by Key Vault (expiry is Unix seconds on the wire)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CertificateAttributes {
    pub enabled: Option<bool>,
    #[serde(rename = "exp", default, with = "chrono::serde::ts_seconds_option")]
    pub expires: Option<DateTime<Utc>>,
}

impl CertificateAttributes {
    pub fn is_disabled(&self) -> bool {
        self.enabled == Some(false)
    }
}

/// Response of a single-certificate fetch
#[derive(Debug, Clone, Deserialize)]
pub struct CertificateBundle {
    pub attributes: Option<CertificateAttributes>,
}

/// One entry of a certificate listing
#[derive(Debug, Clone, Deserialize)]
pub struct CertificateItem {
    pub id: Option<String>,
    pub attributes: Option<CertificateAttributes>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CertificatePage {
    #[serde(default)]
    pub value: Vec<CertificateItem>,
    #[serde(rename = "nextLink")]
    pub next_link: Option<String>,
}

/// Display name for a certificate: everything after the last `/` of its identifier.
///
/// For a versioned identifier this is the version, not the certificate name.
pub fn name_from_id(id: &str) -> &str {
    match id.rfind('/') {
        Some(idx) => &id[idx + 1..],
        None => id,
    }
}

/// Lazily fetches listing pages, following `nextLink` until the service stops returning one
pub struct CertificatePager<'a> {
    client: &'a KeyVaultClient,
    next_url: Option<String>,
}

impl CertificatePager<'_> {
    /// Whether another page may be fetched
    pub fn more(&self) -> bool {
        self.next_url.is_some()
    }

    /// Fetch the next page, or `None` once the listing is exhausted
    pub async fn next_page(&mut self) -> Result<Option<Vec<CertificateItem>>> {
        let Some(url) = self.next_url.take() else {
            return Ok(None);
        };

        let page: CertificatePage = self.client.get_json(&url).await?;
        self.next_url = page.next_link.filter(|link| !link.is_empty());

        tracing::debug!(
            "Fetched page with {} certificates (more: {})",
            page.value.len(),
            self.more()
        );
        Ok(Some(page.value))
    }
}

impl KeyVaultClient {
    /// Get the current version of a certificate by name
    pub async fn get_certificate(&self, name: &str) -> Result<CertificateBundle> {
        let url = self.url(&["certificates", name])?;

        match self.get_json(url.as_str()).await {
            Err(CertCheckError::NotFound(msg)) => {
                Err(CertCheckError::NotFound(format!("{name}: {msg}")))
            }
            other => other,
        }
    }

    /// Start listing every certificate in the vault; each call starts from the first page
    pub fn list_certificates(&self) -> Result<CertificatePager<'_>> {
        Ok(CertificatePager {
            client: self,
            next_url: Some(self.url(&["certificates"])?.into()),
        })
    }
}
