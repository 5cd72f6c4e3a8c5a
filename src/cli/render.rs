// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Render command arguments.
//!
//! ```text
//! explicit:  --env-file FILE, then -e KEY=VALUE (later wins)
//! image:     --image-config FILE Env list, then -I RAW (in order)
//! output:    stdout, or -o FILE (atomic replace)
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::core::env::types::split_declaration;

/// Arguments for the render command.
#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    /// Explicit variable, exported unconditionally. Can be repeated.
    #[arg(short = 'e', long = "env", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub env: Vec<(String, String)>,

    /// File with one explicit KEY=VALUE per line.
    /// Blank lines and lines starting with '#' are ignored.
    #[arg(long = "env-file", value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Raw image declaration, passed through as-is. Can be repeated.
    #[arg(short = 'I', long = "image-env", value_name = "RAW", allow_hyphen_values = true)]
    pub image_env: Vec<String>,

    /// Image metadata JSON (image inspect output or an image config).
    #[arg(long = "image-config", value_name = "FILE")]
    pub image_config: Option<PathBuf>,

    /// Writes the environment file here instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Leaves out image defaults for variables that are set explicitly.
    #[arg(long = "skip-shadowed")]
    pub skip_shadowed: bool,

    /// Drops variables whose names a POSIX shell cannot assign.
    #[arg(long = "skip-invalid-keys")]
    pub skip_invalid_keys: bool,
}

/// Parses an explicit `KEY=VALUE` argument.
fn parse_key_value(arg: &str) -> Result<(String, String), String> {
    split_declaration(arg)
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{arg}'"))
}
