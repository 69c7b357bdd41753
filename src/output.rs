// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rendering of listed MyPods

use crate::constants::REPORT_SEPARATOR;
use crate::error::{Error, Result};
use crate::listing::MyPodEntry;
use std::fmt::Write;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One `key : value` block per MyPod followed by a separator line
    #[default]
    Text,
    Yaml,
    Json,
}

/// Render entries in the requested format
pub fn render(entries: &[MyPodEntry], mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Text => render_text(entries),
        OutputMode::Yaml => {
            serde_yaml::to_string(entries).map_err(|e| Error::RenderError(e.to_string()))
        }
        OutputMode::Json => serde_json::to_string_pretty(entries)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| Error::RenderError(e.to_string())),
    }
}

fn render_text(entries: &[MyPodEntry]) -> Result<String> {
    let mut out = String::new();
    for entry in entries {
        write_entry(&mut out, entry).map_err(|e| Error::RenderError(e.to_string()))?;
    }
    out.push_str(REPORT_SEPARATOR);
    out.push('\n');
    Ok(out)
}

fn write_entry(out: &mut String, entry: &MyPodEntry) -> std::fmt::Result {
    writeln!(out, "namespace : {}", entry.namespace)?;
    writeln!(out, "name : {}", entry.name)?;
    writeln!(out, "replica : {}", entry.replicas)
}
