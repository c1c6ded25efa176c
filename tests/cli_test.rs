#![cfg(feature = "cli")]

use anyhow::Result;
use httpmock::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn run_cli(server: &MockServer, storage: &TempDir, args: &[&str]) -> Result<std::process::Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_cart-store"))
        .arg("--api-url")
        .arg(server.base_url())
        .arg("--storage-path")
        .arg(storage.path())
        .args(args)
        .output()?;
    Ok(output)
}

#[tokio::test]
async fn test_cli_add_show_and_reject() -> Result<()> {
    let storage = TempDir::new()?;
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/stock/4");
            then.status(200)
                .json_body(serde_json::json!({ "id": 4, "amount": 1 }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products/4");
            then.status(200).json_body(serde_json::json!({
                "id": 4,
                "title": "Tênis de Caminhada Leve Confortável",
                "price": 1179.9,
                "image": "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis4.jpg"
            }));
        })
        .await;

    let added = run_cli(&server, &storage, &["add", "4"])?;
    assert!(added.status.success());

    let shown = run_cli(&server, &storage, &["show"])?;
    let stdout = String::from_utf8_lossy(&shown.stdout);
    assert!(shown.status.success());
    assert!(stdout.contains("1 item(s)"));
    assert!(stdout.contains("Total: R$ 1.179,90"));

    let rejected = run_cli(&server, &storage, &["add", "4"])?;
    assert_eq!(rejected.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&rejected.stderr)
        .contains("Quantidade solicitada fora de estoque"));

    Ok(())
}

#[tokio::test]
async fn test_cli_rejects_invalid_api_url() -> Result<()> {
    let storage = TempDir::new()?;
    let output = Command::new(env!("CARGO_BIN_EXE_cart-store"))
        .args(["--api-url", "ftp://example.com"])
        .arg("--storage-path")
        .arg(storage.path())
        .arg("show")
        .output()?;

    assert_eq!(output.status.code(), Some(3));
    Ok(())
}
