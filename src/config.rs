// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::kubeconfig;
use crate::output::OutputMode;
use clap::Parser;
use std::path::{Path, PathBuf};

/// List MyPod custom resources in every namespace of a cluster
#[derive(Parser, Debug)]
#[command(name = "mypod-lister", version)]
pub struct Cli {
    /// Path to the kubeconfig file (defaults to ~/.kube/config)
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use instead of the current one
    #[arg(long)]
    pub context: Option<String>,

    /// Output format
    #[arg(long, short, value_enum, default_value_t)]
    pub output: OutputMode,
}

/// Lister configuration resolved from the command line
#[derive(Debug, Clone)]
pub struct Config {
    /// Kubeconfig to read, `None` means infer from the environment or in-cluster
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
    pub output: OutputMode,
}

impl Config {
    /// Parse the process arguments
    pub fn from_args() -> Self {
        Self::resolve(Cli::parse(), home::home_dir().as_deref())
    }

    /// Apply defaults to parsed arguments.
    /// Without an explicit path the kubeconfig under `home` is used, if there is a home.
    pub fn resolve(cli: Cli, home: Option<&Path>) -> Self {
        let kubeconfig = cli.kubeconfig.or_else(|| {
            home.filter(|h| !h.as_os_str().is_empty())
                .map(|h| h.join(kubeconfig::DIR).join(kubeconfig::FILE))
        });

        Config {
            kubeconfig,
            context: cli.context,
            output: cli.output,
        }
    }
}
