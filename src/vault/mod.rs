pub mod auth;
pub mod certificates;
pub mod client;

use reqwest::Client;

/// Key Vault REST API version sent with every data-plane request
pub const API_VERSION: &str = "7.5";

/// OAuth scope granting access to the Key Vault data plane
pub const KEY_VAULT_SCOPE: &str = "https://vault.azure.net/.default";

/// Create a standardized HTTP client with security best practices
pub fn create_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .use_rustls_tls() // Use rustls with system certificate store
        .build()
}
