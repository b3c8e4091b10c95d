// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::TaggerError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Tagger configuration loaded from a YAML file at startup
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub version: String,
    /// Namespace the gateway pods live in
    pub namespace: String,
    /// Label pairs every candidate pod must carry
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl Config {
    /// Read and parse the configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&raw).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(raw).context("Failed to parse config YAML")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), TaggerError> {
        if self.namespace.trim().is_empty() {
            return Err(TaggerError::Config("namespace must not be empty".to_string()));
        }
        Ok(())
    }

    /// Render the labels as a `key=value,key=value` selector.
    /// Keys come out sorted; no labels selects every pod.
    pub fn label_selector(&self) -> String {
        self.labels
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(",")
    }
}
