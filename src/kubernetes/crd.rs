// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CRD availability checking utilities

use crate::constants::mypod::{GROUP, KIND, VERSION};
use crate::error::{Error, Result};
use kube::{discovery::Discovery, Client};
use tracing::info;

/// Fail fast when the MyPod CRD is not served by the cluster.
pub async fn ensure_mypod_crd(client: &Client) -> Result<()> {
    if mypod_crd_available(client).await? {
        info!("MyPod CRD ({}/{}) is available", GROUP, VERSION);
        Ok(())
    } else {
        Err(Error::CrdNotInstalled(format!("{}.{}/{}", KIND, GROUP, VERSION)))
    }
}

/// Check if the MyPod CRD exists by attempting to discover it.
pub async fn mypod_crd_available(client: &Client) -> Result<bool> {
    let discovery = Discovery::new(client.clone())
        .filter(&[GROUP])
        .run()
        .await?;

    let found = discovery
        .groups()
        .filter(|group| group.name() == GROUP)
        .flat_map(|group| group.recommended_resources())
        .any(|(ar, _)| ar.kind == KIND && ar.version == VERSION);

    Ok(found)
}
