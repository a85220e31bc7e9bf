// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reusable multi-pattern replacer.

use std::io::Write;

use crate::emit::{self, Unit};
use crate::error::{Result, WriteError};
use crate::matcher::{Strategy, StrategyKind};
use crate::table::PatternTable;

/// Replaces every non-overlapping occurrence of each rule's `old` text with
/// its `new` text in a single left-to-right pass.
///
/// At each position the earliest-registered matching rule wins, even when a
/// later rule would match a longer prefix. A built replacer is immutable and
/// can be shared across threads.
///
/// ```
/// use replacer::Replacer;
///
/// let r = Replacer::new(&["a", "1", "aa", "2", "aaa", "3"]).unwrap();
/// assert_eq!(r.replace("aaaa"), "1111");
/// ```
pub struct Replacer {
    table: PatternTable,
    strategy: Strategy,
}

impl Replacer {
    /// Build from a flat list of alternating old/new strings.
    pub fn new<S: AsRef<str>>(flat: &[S]) -> Result<Self> {
        Ok(Self::from_table(PatternTable::build(flat)?))
    }

    /// Build from explicit (old, new) pairs.
    pub fn from_pairs<I, O, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (O, N)>,
        O: Into<String>,
        N: Into<String>,
    {
        Self::from_table(PatternTable::from_pairs(pairs))
    }

    pub fn from_table(table: PatternTable) -> Self {
        let strategy = Strategy::select(&table);
        Self { table, strategy }
    }

    /// Build with the general trie engine, skipping strategy selection.
    ///
    /// Output is identical to [`from_table`](Self::from_table); this exists
    /// for comparing engines.
    pub fn trie(table: PatternTable) -> Self {
        let strategy = Strategy::trie(&table);
        Self { table, strategy }
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// Engine chosen for this rule table.
    pub fn kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// Return a copy of `input` with all replacements performed.
    ///
    /// Zero-length rules fire only at character boundaries, so the result
    /// is always valid UTF-8.
    pub fn replace(&self, input: &str) -> String {
        tracing::trace!(strategy = %self.kind(), len = input.len(), "replace");
        let out = emit::materialize(&self.strategy, input.as_bytes(), Unit::Char);
        // Rules and input are UTF-8 and matches land on char boundaries.
        String::from_utf8(out)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
    }

    /// Byte-oriented [`replace`](Self::replace): every byte is a scan unit.
    pub fn replace_bytes(&self, input: &[u8]) -> Vec<u8> {
        tracing::trace!(strategy = %self.kind(), len = input.len(), "replace_bytes");
        emit::materialize(&self.strategy, input, Unit::Byte)
    }

    /// Stream the replaced form of `input` into `sink`.
    ///
    /// Returns the number of bytes written. On the first failed write the
    /// scan stops and the error carries the bytes the sink accepted.
    pub fn write_replaced<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        input: &str,
    ) -> std::result::Result<usize, WriteError> {
        tracing::trace!(strategy = %self.kind(), len = input.len(), "write_replaced");
        emit::stream(&self.strategy, sink, input.as_bytes(), Unit::Char)
    }

    /// Byte-oriented [`write_replaced`](Self::write_replaced).
    pub fn write_replaced_bytes<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        input: &[u8],
    ) -> std::result::Result<usize, WriteError> {
        tracing::trace!(strategy = %self.kind(), len = input.len(), "write_replaced_bytes");
        emit::stream(&self.strategy, sink, input, Unit::Byte)
    }
}

#[cfg(test)]
#[path = "replacer_tests.rs"]
mod tests;
