// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Custom resource {0} is not served by the cluster")]
    CrdNotInstalled(String),

    #[error("Failed to list MyPods in namespace {namespace}: {source}")]
    ListMyPods {
        namespace: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to render output: {0}")]
    RenderError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
