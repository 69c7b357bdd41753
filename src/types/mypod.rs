// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[kube(group = "ilsa.example.com", version = "v1", kind = "MyPod")]
#[kube(namespaced)]
#[kube(printcolumn = r#"{"name":"Replicas", "type":"integer", "jsonPath":".spec.replicas"}"#)]
pub struct MyPodSpec {
    pub replicas: i64,
}

impl MyPod {
    /// Desired replica count from the spec
    pub fn replicas(&self) -> i64 {
        self.spec.replicas
    }
}
