// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster connection from a kubeconfig file or the environment

use crate::config::Config;
use crate::error::{Error, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a Kubernetes client for the configured cluster
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let client_config = load_kube_config(config).await?;
    info!("Using cluster {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| Error::KubeconfigError(format!("Failed to create client: {}", e)))
}

/// Resolve the client configuration.
/// An explicit kubeconfig file is read as is, otherwise the config is inferred
/// from `KUBECONFIG`, `~/.kube/config` or the in-cluster service account.
pub async fn load_kube_config(config: &Config) -> Result<KConfig> {
    let options = KubeConfigOptions {
        context: config.context.clone(),
        ..Default::default()
    };

    match (&config.kubeconfig, &config.context) {
        (Some(path), _) => load_from_file(path, &options).await,
        (None, Some(context)) => {
            debug!("Loading kubeconfig context {} from the environment", context);
            KConfig::from_kubeconfig(&options).await.map_err(|e| {
                Error::KubeconfigError(format!("Failed to load context {}: {}", context, e))
            })
        }
        (None, None) => {
            debug!("No kubeconfig path given, inferring config");
            KConfig::infer()
                .await
                .map_err(|e| Error::KubeconfigError(format!("Failed to infer config: {}", e)))
        }
    }
}

async fn load_from_file(path: &Path, options: &KubeConfigOptions) -> Result<KConfig> {
    debug!("Reading kubeconfig from {}", path.display());

    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        Error::KubeconfigError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    KConfig::from_custom_kubeconfig(kubeconfig, options)
        .await
        .map_err(|e| {
            Error::KubeconfigError(format!(
                "Failed to create config from {}: {}",
                path.display(),
                e
            ))
        })
}
