// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Priority-ordered multi-pattern string substitution.
//!
//! Rules are (old, new) pairs. A [`Replacer`] scans its input once, left to
//! right; at each position the earliest-registered rule whose `old` text
//! starts there is applied. The cheapest engine that preserves these
//! semantics is picked per rule table (see [`matcher`]).

pub mod cli;
pub mod config;
mod emit;
pub mod error;
pub mod matcher;
pub mod replacer;
pub mod table;

pub use error::{Error, ExitCode, Result, WriteError};
pub use matcher::{Strategy, StrategyKind};
pub use replacer::Replacer;
pub use table::{PatternTable, Rule};

#[cfg(test)]
pub mod test_utils;
