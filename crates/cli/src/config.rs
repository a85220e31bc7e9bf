// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule file parsing and validation.
//!
//! Handles TOML rule files with version validation and unknown key warnings:
//!
//! ```toml
//! version = 1
//!
//! [[rule]]
//! old = "colour"
//! new = "color"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::table::PatternTable;

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "rule"];

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    rule: Vec<RuleEntry>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// One `[[rule]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    pub old: String,
    pub new: String,
}

/// Parsed rule file.
#[derive(Debug, Default)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Rules in file order.
    pub rules: Vec<RuleEntry>,
}

impl Config {
    /// Rules as (old, new) pairs, in file order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|r| (r.old.as_str(), r.new.as_str()))
    }

    /// Rules as a flat alternating old/new list.
    pub fn flat(&self) -> Vec<String> {
        self.pairs()
            .flat_map(|(old, new)| [old.to_string(), new.to_string()])
            .collect()
    }

    pub fn table(&self) -> PatternTable {
        PatternTable::from_pairs(self.pairs())
    }
}

/// Load and validate a rule file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse rule file content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = flexible.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            tracing::warn!(
                "{}: unrecognized field `{}` (ignored)",
                path.display(),
                key
            );
        }
    }

    tracing::debug!(rules = flexible.rule.len(), "loaded rules from {}", path.display());

    Ok(Config {
        version,
        rules: flexible.rule,
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
