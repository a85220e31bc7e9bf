// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides sink doubles and table builders for unit tests in the crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::{self, Write};

use crate::replacer::Replacer;
use crate::table::PatternTable;

/// Builds a replacer from a flat old/new list.
pub fn replacer(flat: &[&str]) -> Replacer {
    Replacer::new(flat).unwrap()
}

/// Builds a replacer that always uses the trie engine.
pub fn trie_replacer(flat: &[&str]) -> Replacer {
    Replacer::trie(PatternTable::build(flat).unwrap())
}

/// Sink that fails on its `fail_on`-th write call (1-based).
pub struct FailingSink {
    pub accepted: Vec<u8>,
    pub calls: usize,
    fail_on: usize,
}

impl FailingSink {
    pub fn failing_on(fail_on: usize) -> Self {
        Self {
            accepted: Vec::new(),
            calls: 0,
            fail_on,
        }
    }
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        if self.calls >= self.fail_on {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "unwritable"));
        }
        self.accepted.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that accepts at most `budget` bytes in total, then fails.
///
/// A write that straddles the budget is accepted partially.
pub struct LimitedSink {
    pub accepted: Vec<u8>,
    budget: usize,
}

impl LimitedSink {
    pub fn with_budget(budget: usize) -> Self {
        Self {
            accepted: Vec::new(),
            budget,
        }
    }
}

impl Write for LimitedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.budget == 0 {
            return Err(io::Error::other("sink full"));
        }
        let n = buf.len().min(self.budget);
        self.budget -= n;
        self.accepted.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that takes one byte per call and is interrupted on every other call.
#[derive(Default)]
pub struct TrickleSink {
    pub accepted: Vec<u8>,
    interrupt: bool,
}

impl Write for TrickleSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;
        if self.interrupt {
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        match buf.first() {
            Some(&b) => {
                self.accepted.push(b);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that reports success without taking anything.
pub struct ZeroSink;

impl Write for ZeroSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Ok(0)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
