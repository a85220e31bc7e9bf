// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered substitution rules.
//!
//! A table is built once from old/new pairs. Each rule's priority is the
//! index of its pair; a later pair whose `old` text was already seen is
//! dropped entirely, so every `old` text appears at most once.

use std::collections::HashSet;

use crate::error::{Error, Result};

/// One substitution: replace `old` with `new`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    old: String,
    new: String,
    priority: usize,
}

impl Rule {
    /// Text to search for.
    pub fn old(&self) -> &str {
        &self.old
    }

    /// Replacement text.
    pub fn replacement(&self) -> &str {
        &self.new
    }

    /// Registration index. Lower wins.
    pub fn priority(&self) -> usize {
        self.priority
    }
}

/// Validated, deduplicated rule list.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    /// Rules with non-empty `old`, in priority order.
    rules: Vec<Rule>,
    /// The zero-length rule, if any.
    empty: Option<Rule>,
    /// Number of pairs discarded as duplicates.
    dropped: usize,
}

impl PatternTable {
    /// Build a table from a flat list of alternating old/new strings.
    ///
    /// Returns `Err(OddArgumentCount)` when the list cannot be split into
    /// pairs.
    pub fn build<S: AsRef<str>>(flat: &[S]) -> Result<Self> {
        if flat.len() % 2 != 0 {
            return Err(Error::OddArgumentCount { count: flat.len() });
        }
        Ok(Self::from_pairs(
            flat.chunks_exact(2)
                .map(|pair| (pair[0].as_ref(), pair[1].as_ref())),
        ))
    }

    /// Build a table from explicit (old, new) pairs.
    pub fn from_pairs<I, O, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (O, N)>,
        O: Into<String>,
        N: Into<String>,
    {
        let mut table = Self::default();
        let mut seen: HashSet<String> = HashSet::new();

        for (priority, (old, new)) in pairs.into_iter().enumerate() {
            let old = old.into();
            if !seen.insert(old.clone()) {
                table.dropped += 1;
                continue;
            }

            let rule = Rule {
                old,
                new: new.into(),
                priority,
            };
            if rule.old.is_empty() {
                table.empty = Some(rule);
            } else {
                table.rules.push(rule);
            }
        }

        tracing::debug!(
            rules = table.len(),
            dropped = table.dropped,
            "built pattern table"
        );
        table
    }

    /// Total retained rules, including the zero-length rule.
    pub fn len(&self) -> usize {
        self.rules.len() + usize::from(self.empty.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The zero-length rule, if one was registered.
    pub fn empty_rule(&self) -> Option<&Rule> {
        self.empty.as_ref()
    }

    /// Rules with non-empty `old`, in ascending priority.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of later duplicates that were discarded.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
