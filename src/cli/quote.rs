// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Quote command arguments.

use clap::Args;

/// Arguments for the quote command.
#[derive(Debug, Clone, Default, Args)]
pub struct QuoteArgs {
    /// Prints `${KEY-'value'}` instead of `'value'`.
    #[arg(short = 'f', long = "fallback", value_name = "KEY")]
    pub fallback: Option<String>,

    /// Values to quote, one output line each.
    #[arg(value_name = "VALUE", required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}
