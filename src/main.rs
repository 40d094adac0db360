use keyvault_cert_check::cli::{handle_command, Cli};

#[tokio::main]
async fn main() {
    use clap::Parser;
    let cli = Cli::parse();

    if let Err(e) = handle_command(cli).await {
        tracing::error!("Certificate check failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
