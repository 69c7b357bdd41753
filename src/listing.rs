// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Listing MyPods across all namespaces

use crate::error::{Error, Result};
use crate::kubernetes::list_namespace_names;
use crate::types::MyPod;
use futures::{stream, StreamExt, TryStreamExt};
use kube::{api::ListParams, Api, Client, ResourceExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A single MyPod as reported to the user
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MyPodEntry {
    pub namespace: String,
    pub name: String,
    pub replicas: i64,
}

impl MyPodEntry {
    fn new(namespace: &str, pod: &MyPod) -> Self {
        MyPodEntry {
            namespace: namespace.to_string(),
            name: pod.name_any(),
            replicas: pod.replicas(),
        }
    }
}

/// List the MyPods of one namespace
#[instrument(skip(client))]
pub async fn list_mypods_in(client: &Client, namespace: &str) -> Result<Vec<MyPod>> {
    let mypods: Api<MyPod> = Api::namespaced(client.clone(), namespace);
    let list = mypods
        .list(&ListParams::default())
        .await
        .map_err(|source| Error::ListMyPods {
            namespace: namespace.to_string(),
            source,
        })?;

    debug!("Found {} MyPods in namespace {}", list.items.len(), namespace);
    Ok(list.items)
}

/// List the MyPods of every namespace, in namespace order.
/// The first namespace that fails to list aborts the walk.
#[instrument(skip(client))]
pub async fn list_all_mypods(client: &Client) -> Result<Vec<MyPodEntry>> {
    let namespaces = list_namespace_names(client).await?;
    info!("Listing MyPods in {} namespaces", namespaces.len());

    let per_namespace: Vec<Vec<MyPodEntry>> = stream::iter(namespaces)
        .then(|namespace| async move {
            let pods = list_mypods_in(client, &namespace).await?;
            Ok::<_, Error>(
                pods.iter()
                    .map(|pod| MyPodEntry::new(&namespace, pod))
                    .collect::<Vec<_>>(),
            )
        })
        .try_collect()
        .await?;

    let entries: Vec<MyPodEntry> = per_namespace.into_iter().flatten().collect();
    info!("Found {} MyPods in total", entries.len());
    Ok(entries)
}
