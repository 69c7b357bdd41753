// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Coordinates of the MyPod custom resource
pub mod mypod {
    pub const GROUP: &str = "ilsa.example.com";
    pub const VERSION: &str = "v1";
    pub const KIND: &str = "MyPod";
}

/// Line printed after the text report
pub const REPORT_SEPARATOR: &str = "------";

/// Default kubeconfig location relative to the home directory
pub mod kubeconfig {
    pub const DIR: &str = ".kube";
    pub const FILE: &str = "config";
}
