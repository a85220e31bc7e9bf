// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// Replace text using priority-ordered OLD NEW rules
#[derive(Parser)]
#[command(name = "replacer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Load rules from a TOML file (they take priority over positional pairs)
    #[arg(short = 'C', long = "config", env = "REPLACER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read input from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Scan raw bytes; input need not be UTF-8
    #[arg(long)]
    pub bytes: bool,

    /// Print the selected matcher to stderr
    #[arg(long)]
    pub show_strategy: bool,

    /// Alternating OLD NEW strings
    #[arg(value_name = "OLD NEW", allow_hyphen_values = true)]
    pub pairs: Vec<String>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
