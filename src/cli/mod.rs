// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envfile-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envfile [global options] <command>
//! render [-e KEY=VALUE]... [-I RAW]... [--image-config FILE] [-o FILE]
//! quote [--fallback KEY] <VALUE>...
//! options
//! config-sources
//! version
//! ```

pub mod global;
pub mod quote;
pub mod render;


use crate::cli::global::GlobalOptions;
use crate::cli::quote::QuoteArgs;
use crate::cli::render::RenderArgs;
use clap::{Parser, Subcommand};

/// Container environment file generator.
#[derive(Debug, Parser)]
#[command(
    name = "envfile",
    author,
    version,
    about = "Container environment file generator",
    long_about = "Renders a shell-sourceable environment file for a container.\n\n\
                  Explicit variables (--env, --env-file) are exported unconditionally.\n\
                  Image variables (--image-env, --image-config) are exported as\n\
                  KEY=${KEY-'default'}, so a value already present in the sourcing\n\
                  shell wins over the image default.",
    after_help = "CONFIG FILES:\n\n\
                  envfile reads `envfile.toml` from the current directory if it\n\
                  exists, then every file given with --config, in order. Variables\n\
                  named ENVFILE_<SECTION>__<KEY> override both, and command-line\n\
                  flags override everything. Use --no-default-config to skip\n\
                  `envfile.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files, variables and flags that were applied.
    #[command(name = "config-sources")]
    ConfigSources,

    /// Renders an environment file.
    Render(RenderArgs),

    /// Prints values quoted for a POSIX shell.
    Quote(QuoteArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
