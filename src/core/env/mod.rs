// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (BTreeMap<String, String>, byte-ordered names)
//! Sources: Env::from_map(), FromIterator, image::parse_image_env()
//! Ops: set/get/remove/iter
//! ```
//!
//! - **Case-sensitive**: `PATH` and `Path` are distinct, as in a POSIX shell
//! - **Deterministic order**: iteration is sorted by name

pub mod container;
pub mod image;
pub mod types;

#[cfg(test)]
mod tests;

pub use container::Env;
pub use image::{MalformedEntry, ParsedImage, parse, parse_image_env};
