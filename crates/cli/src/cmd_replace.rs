// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Replace command implementation.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use replacer::cli::Cli;
use replacer::config;
use replacer::error::ExitCode;
use replacer::{Error, Replacer};

/// Run the replace command.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let mut flat = match &cli.config {
        Some(path) => {
            tracing::debug!("loading rules from {}", path.display());
            config::load(path)?.flat()
        }
        None => Vec::new(),
    };
    flat.extend(cli.pairs.iter().cloned());

    let replacer = Replacer::new(&flat)?;
    if cli.show_strategy {
        eprintln!("strategy: {}", replacer.kind());
    }

    let input = read_input(cli.input.as_deref())?;

    let written = match &cli.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| Error::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
            let mut sink = BufWriter::new(file);
            let written = write(&replacer, &mut sink, input, cli.bytes)?;
            sink.flush()?;
            written
        }
        None => {
            let mut sink = BufWriter::new(std::io::stdout().lock());
            let written = write(&replacer, &mut sink, input, cli.bytes)?;
            sink.flush()?;
            written
        }
    };

    tracing::debug!(written, "replace finished");
    Ok(ExitCode::Success)
}

fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(path) => Ok(std::fs::read(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write<W: Write>(
    replacer: &Replacer,
    sink: &mut W,
    input: Vec<u8>,
    bytes: bool,
) -> anyhow::Result<usize> {
    if bytes {
        return Ok(replacer.write_replaced_bytes(sink, &input)?);
    }
    let text = String::from_utf8(input).map_err(|_| {
        Error::Argument("input is not valid UTF-8 (use --bytes for raw input)".to_string())
    })?;
    Ok(replacer.write_replaced(sink, &text)?)
}
