// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, CRD discovery and namespace listing.

pub mod client;
pub mod crd;
pub mod namespaces;

pub use client::{create_client, load_kube_config};
pub use crd::{ensure_mypod_crd, mypod_crd_available};
pub use namespaces::list_namespace_names;
