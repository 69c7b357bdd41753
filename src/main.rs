// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mypod_lister::config::Config;
use mypod_lister::kubernetes::{create_client, ensure_mypod_crd};
use mypod_lister::listing::list_all_mypods;
use mypod_lister::output::render;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, the report goes to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args();
    info!(
        "Configuration loaded: kubeconfig={}",
        config
            .kubeconfig
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<inferred>".to_string())
    );

    let client = create_client(&config)
        .await
        .context("Failed to connect to Kubernetes cluster")?;

    ensure_mypod_crd(&client).await?;

    let entries = list_all_mypods(&client).await?;
    let report = render(&entries, config.output)?;
    print!("{}", report);

    Ok(())
}
