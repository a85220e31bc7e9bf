// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Emission of scan output.
//!
//! Every matcher writes its output as a sequence of fragments through
//! [`Emit`]. The materializing form collects fragments into a `Vec<u8>`;
//! the streaming form forwards them to a caller's `io::Write` and stops at
//! the first failed write.

use std::convert::Infallible;
use std::io::{self, Write};

use crate::error::WriteError;
use crate::matcher::Strategy;

/// Destination for output fragments.
pub(crate) trait Emit {
    type Error;

    fn emit(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl Emit for Vec<u8> {
    type Error = Infallible;

    fn emit(&mut self, bytes: &[u8]) -> Result<(), Infallible> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Forwards fragments to a sink, counting bytes it accepts.
pub(crate) struct CountingSink<'a, W: Write + ?Sized> {
    inner: &'a mut W,
    written: usize,
}

impl<'a, W: Write + ?Sized> CountingSink<'a, W> {
    pub(crate) fn new(inner: &'a mut W) -> Self {
        Self { inner, written: 0 }
    }

    pub(crate) fn written(&self) -> usize {
        self.written
    }
}

impl<W: Write + ?Sized> Emit for CountingSink<'_, W> {
    type Error = io::Error;

    /// Like `write_all`, but keeps the count of a partially written fragment.
    fn emit(&mut self, mut bytes: &[u8]) -> io::Result<()> {
        while !bytes.is_empty() {
            match self.inner.write(bytes) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "sink accepted zero bytes",
                    ));
                }
                Ok(n) => {
                    self.written += n;
                    bytes = &bytes[n..];
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

/// Granularity of a literal copy when no rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    /// Advance one byte.
    Byte,
    /// Advance one UTF-8 scalar, so zero-length rules fire only on
    /// character boundaries.
    Char,
}

impl Unit {
    /// Width of the unit starting at `input[pos]`.
    pub(crate) fn width(self, input: &[u8], pos: usize) -> usize {
        let width = match self {
            Unit::Byte => 1,
            Unit::Char => match input[pos] {
                0xC0..=0xDF => 2,
                0xE0..=0xEF => 3,
                0xF0..=0xF7 => 4,
                _ => 1,
            },
        };
        width.min(input.len() - pos)
    }
}

/// Run a scan into a fresh buffer.
pub(crate) fn materialize(strategy: &Strategy, input: &[u8], unit: Unit) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    match strategy.scan(input, unit, &mut out) {
        Ok(()) => out,
        Err(never) => match never {},
    }
}

/// Run a scan into `sink`, returning the bytes written.
pub(crate) fn stream<W: Write + ?Sized>(
    strategy: &Strategy,
    sink: &mut W,
    input: &[u8],
    unit: Unit,
) -> Result<usize, WriteError> {
    let mut counting = CountingSink::new(sink);
    match strategy.scan(input, unit, &mut counting) {
        Ok(()) => Ok(counting.written()),
        Err(source) => {
            tracing::debug!(written = counting.written(), "sink write failed: {}", source);
            Err(WriteError {
                written: counting.written(),
                source,
            })
        }
    }
}

#[cfg(test)]
#[path = "emit_tests.rs"]
mod tests;
