// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Quote command implementation for envfile-rs.

use std::io::Write;

use anyhow::Context;

use crate::cli::quote::QuoteArgs;
use crate::error::Result;
use crate::render::quote::{quote, quote_with_fallback};

/// Formats each value of `args` the way the render command would.
#[must_use]
pub fn quote_lines(args: &QuoteArgs) -> Vec<String> {
    args.values
        .iter()
        .map(|value| match &args.fallback {
            Some(key) => quote_with_fallback(key, value),
            None => quote(value),
        })
        .collect()
}

/// Main handler for quote command.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run_quote_command(args: &QuoteArgs) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for line in quote_lines(args) {
        writeln!(stdout, "{line}").context("failed to write to stdout")?;
    }
    stdout.flush().context("failed to write to stdout")?;
    Ok(())
}
