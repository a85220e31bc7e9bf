// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Direct-lookup matchers for tables whose patterns are all one byte long.

use crate::emit::Emit;
use crate::table::Rule;

/// Bytes translated per emitted fragment by [`ByteMap`].
const CHUNK: usize = 4096;

/// Byte-to-byte translation through a 256-entry table.
pub struct ByteMap {
    map: [u8; 256],
}

impl ByteMap {
    /// Build from rules whose `old` and `new` are both one byte.
    ///
    /// Rules are visited in priority order and an entry is only set once.
    pub fn new(rules: &[Rule]) -> Self {
        let mut map: [u8; 256] = std::array::from_fn(|b| b as u8);
        let mut set = [false; 256];
        for rule in rules {
            let (old, new) = (rule.old().as_bytes(), rule.replacement().as_bytes());
            let (&[old], &[new]) = (old, new) else {
                continue;
            };
            if !set[old as usize] {
                set[old as usize] = true;
                map[old as usize] = new;
            }
        }
        Self { map }
    }

    /// Translation for one byte.
    pub fn get(&self, byte: u8) -> u8 {
        self.map[byte as usize]
    }

    pub(crate) fn scan<E: Emit>(&self, input: &[u8], out: &mut E) -> Result<(), E::Error> {
        let mut buf = [0u8; CHUNK];
        for chunk in input.chunks(CHUNK) {
            for (dst, &src) in buf.iter_mut().zip(chunk) {
                *dst = self.map[src as usize];
            }
            out.emit(&buf[..chunk.len()])?;
        }
        Ok(())
    }
}

/// Byte-to-text replacement through a 256-entry table.
pub struct ByteTable {
    table: [Option<Box<[u8]>>; 256],
}

impl ByteTable {
    /// Build from rules whose `old` is one byte; `new` may be any length.
    pub fn new(rules: &[Rule]) -> Self {
        let mut table: [Option<Box<[u8]>>; 256] = std::array::from_fn(|_| None);
        for rule in rules {
            let &[old] = rule.old().as_bytes() else {
                continue;
            };
            let slot = &mut table[old as usize];
            if slot.is_none() {
                *slot = Some(rule.replacement().as_bytes().into());
            }
        }
        Self { table }
    }

    /// Replacement for one byte, if it has a rule.
    pub fn get(&self, byte: u8) -> Option<&[u8]> {
        self.table[byte as usize].as_deref()
    }

    pub(crate) fn scan<E: Emit>(&self, input: &[u8], out: &mut E) -> Result<(), E::Error> {
        let mut last = 0;
        for (pos, &byte) in input.iter().enumerate() {
            if let Some(new) = &self.table[byte as usize] {
                out.emit(&input[last..pos])?;
                out.emit(new)?;
                last = pos + 1;
            }
        }
        out.emit(&input[last..])
    }
}

#[cfg(test)]
#[path = "byte_tests.rs"]
mod tests;
