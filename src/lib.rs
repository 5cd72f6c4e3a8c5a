// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |           render / quote / config
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |   config      input       |
//!              |   TOML+env    files, JSON |
//!              '-------------+-------------'
//!                            v
//!   +-----------------------------------------+
//!   |  render   quote, ${KEY-...}, document   |
//!   +-----------------------------------------+
//!   |  core     Env, image declaration parser |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use envfile_rs::core::env::Env;
//! use envfile_rs::render::render;
//!
//! let mut explicit = Env::new();
//! explicit.set("X", "it's");
//!
//! let mut out = Vec::new();
//! render(&explicit, &["X=default", "A=1", "B"], &mut out)?;
//!
//! let doc = String::from_utf8(out)?;
//! assert!(doc.contains(r#"export X='it'"'"'s'"#));
//! assert!(doc.contains("export A=${A-'1'}"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod render;
