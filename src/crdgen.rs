// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::CustomResourceExt;
use mypod_lister::types::MyPod;

/// Print the MyPod CRD, e.g. `crdgen | kubectl apply -f -`
fn main() -> Result<()> {
    let yaml = serde_yaml::to_string(&MyPod::crd()).context("Failed to render MyPod CRD")?;
    print!("{}", yaml);
    Ok(())
}
