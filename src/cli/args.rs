use clap::Parser;

/// Flags left unset fall back to the environment variable named in their help text.
#[derive(Parser)]
#[command(name = "keyvault-cert-check")]
#[command(version = "1.0.0")]
#[command(about = "Report expired and expiring certificates in an Azure Key Vault")]
#[command(long_about = None)]
#[command(
    after_help = "Long flags take two dashes, e.g. --vault-uri https://myvault.vault.azure.net --cert-name web-tls"
)]
pub struct Cli {
    /// Azure Key Vault URI [env: AZURE_KEY_VAULT_URI]
    #[arg(long)]
    pub vault_uri: Option<String>,

    /// Azure Client ID [env: AZURE_CLIENT_ID]
    #[arg(long)]
    pub client_id: Option<String>,

    /// Azure Tenant ID [env: AZURE_TENANT_ID]
    #[arg(long)]
    pub tenant_id: Option<String>,

    /// Azure Client Secret [env: AZURE_CLIENT_SECRET]
    #[arg(long)]
    pub client_secret: Option<String>,

    /// Specific certificate name to check; all certificates are checked when unset [env: AZURE_KEYVAULT_CERT_NAME]
    #[arg(long)]
    pub cert_name: Option<String>,

    /// Microsoft identity platform host [env: AZURE_AUTHORITY_HOST]
    #[arg(long, value_hint = clap::ValueHint::Url)]
    pub authority_host: Option<String>,

    /// Enable verbose logging (repeat for more verbosity: -v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable coloured status lines
    #[arg(long)]
    pub no_color: bool,
}
