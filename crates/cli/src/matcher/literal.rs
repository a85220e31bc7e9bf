// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-rule substring replacement.

use memchr::memmem::Finder;

use crate::emit::Emit;
use crate::table::Rule;

/// Replaces every non-overlapping occurrence of one non-empty pattern.
///
/// Search uses SIMD-accelerated `memchr::memmem`.
pub struct LiteralMatcher {
    finder: Finder<'static>,
    new: Box<[u8]>,
}

impl LiteralMatcher {
    pub fn new(rule: &Rule) -> Self {
        Self {
            finder: Finder::new(rule.old().as_bytes()).into_owned(),
            new: rule.replacement().as_bytes().into(),
        }
    }

    /// Byte offsets of every non-overlapping match, left to right.
    pub fn find_all(&self, input: &[u8]) -> Vec<usize> {
        self.finder.find_iter(input).collect()
    }

    pub(crate) fn scan<E: Emit>(&self, input: &[u8], out: &mut E) -> Result<(), E::Error> {
        let old_len = self.finder.needle().len();
        let mut last = 0;
        for start in self.finder.find_iter(input) {
            out.emit(&input[last..start])?;
            out.emit(&self.new)?;
            last = start + old_len;
        }
        out.emit(&input[last..])
    }
}

#[cfg(test)]
#[path = "literal_tests.rs"]
mod tests;
