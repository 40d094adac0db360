use crate::cert::{CheckSummary, ExpiryChecker, StatusReporter};
use crate::cli::args::Cli;
use crate::config::{ProcessEnv, Settings};
use crate::utils::errors::Result;
use crate::utils::output::OutputFormat;
use crate::vault::auth::ClientSecretCredential;
use crate::vault::client::KeyVaultClient;
use crate::vault::{create_http_client, KEY_VAULT_SCOPE};
use chrono::Utc;
use std::io::{self, Write};

pub async fn handle_command(cli: Cli) -> Result<()> {
    // Initialize logging - always to stderr
    if !cli.quiet {
        let log_level = match cli.verbose {
            0 => "keyvault_cert_check=warn",  // Default: warnings only
            1 => "keyvault_cert_check=info",  // -v: info level
            2 => "keyvault_cert_check=debug", // -vv: debug level
            _ => "keyvault_cert_check=trace", // -vvv+: trace level
        };

        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(log_level)
            .init();
    }

    let output = OutputFormat::new(!cli.no_color);
    let settings = Settings::load(&cli, &ProcessEnv);

    run_check(&settings, output, io::stdout()).await?;
    Ok(())
}

/// Validate settings, authenticate, then check one or all certificates
pub async fn run_check<W: Write>(
    settings: &Settings,
    output: OutputFormat,
    out: W,
) -> Result<CheckSummary> {
    settings.validate()?;
    tracing::debug!("Using settings: {:?}", settings);

    let http = create_http_client()?;
    let credential = ClientSecretCredential::new(http.clone(), settings);
    let token = credential.get_token(KEY_VAULT_SCOPE).await?;

    let client = KeyVaultClient::new(http, &settings.vault_uri, token);
    let mut checker = ExpiryChecker::new(&client, StatusReporter::new(output, out));

    let now = Utc::now();
    match settings.cert_name.as_deref() {
        Some(name) => checker.check_single(name, now).await,
        None => checker.check_all(now).await,
    }
}
