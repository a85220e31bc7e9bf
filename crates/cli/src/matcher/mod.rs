// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Matching engines and strategy selection.
//!
//! A pattern table is classified once into the cheapest engine that gives
//! the same output as the general trie:
//! - No rules: identity copy
//! - One non-empty rule: memchr::memmem substring search
//! - All patterns one byte: 256-entry lookup (byte or text replacement)
//! - Everything else: priority-aware trie

pub mod byte;
pub mod literal;
pub mod trie;

use std::fmt;

pub use byte::{ByteMap, ByteTable};
pub use literal::LiteralMatcher;
pub use trie::TrieMatcher;

use crate::emit::{Emit, Unit};
use crate::table::PatternTable;

/// A matcher chosen for a specific pattern table.
pub enum Strategy {
    /// No rules: output equals input.
    Identity,
    /// Exactly one non-empty rule.
    Literal(LiteralMatcher),
    /// Every rule maps one byte to one byte.
    ByteToByte(ByteMap),
    /// Every rule maps one byte to arbitrary text.
    ByteToBytes(ByteTable),
    /// General case.
    Trie(TrieMatcher),
}

/// Which engine a [`Strategy`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Identity,
    Literal,
    ByteToByte,
    ByteToBytes,
    Trie,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::Identity => "identity",
            StrategyKind::Literal => "literal",
            StrategyKind::ByteToByte => "byte-to-byte",
            StrategyKind::ByteToBytes => "byte-to-bytes",
            StrategyKind::Trie => "trie",
        };
        f.write_str(name)
    }
}

impl Strategy {
    /// Pick the fastest engine for `table`.
    pub fn select(table: &PatternTable) -> Self {
        let strategy = if table.is_empty() {
            Strategy::Identity
        } else if table.empty_rule().is_some() {
            Strategy::trie(table)
        } else if let [rule] = table.rules() {
            Strategy::Literal(LiteralMatcher::new(rule))
        } else if table.rules().iter().all(|r| r.old().len() == 1) {
            if table.rules().iter().all(|r| r.replacement().len() == 1) {
                Strategy::ByteToByte(ByteMap::new(table.rules()))
            } else {
                Strategy::ByteToBytes(ByteTable::new(table.rules()))
            }
        } else {
            Strategy::trie(table)
        };

        tracing::debug!(strategy = %strategy.kind(), rules = table.len(), "selected matcher");
        strategy
    }

    /// The general engine, regardless of table shape.
    pub fn trie(table: &PatternTable) -> Self {
        Strategy::Trie(TrieMatcher::new(table))
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Identity => StrategyKind::Identity,
            Strategy::Literal(_) => StrategyKind::Literal,
            Strategy::ByteToByte(_) => StrategyKind::ByteToByte,
            Strategy::ByteToBytes(_) => StrategyKind::ByteToBytes,
            Strategy::Trie(_) => StrategyKind::Trie,
        }
    }

    pub(crate) fn scan<E: Emit>(
        &self,
        input: &[u8],
        unit: Unit,
        out: &mut E,
    ) -> Result<(), E::Error> {
        match self {
            Strategy::Identity => out.emit(input),
            Strategy::Literal(m) => m.scan(input, out),
            Strategy::ByteToByte(m) => m.scan(input, out),
            Strategy::ByteToBytes(m) => m.scan(input, out),
            Strategy::Trie(m) => m.scan(input, unit, out),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
