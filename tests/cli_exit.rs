use std::process::Command;

fn checker() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_keyvault-cert-check"));
    cmd.env_clear();
    cmd
}

#[test]
fn test_empty_environment_exits_non_zero() {
    let output = checker().output().expect("binary should start");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: AZURE_KEY_VAULT_URI is required"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_secret_exits_non_zero_with_flags() {
    let output = checker()
        .args([
            "--quiet",
            "--vault-uri",
            "https://myvault.vault.azure.net",
            "--client-id",
            "app-id",
            "--tenant-id",
            "tenant-id",
        ])
        .output()
        .expect("binary should start");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("AZURE_CLIENT_SECRET is required"), "stderr: {stderr}");
}
