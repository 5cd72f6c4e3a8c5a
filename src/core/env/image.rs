// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parser for environment declarations found in image metadata.
//!
//! ```text
//! ["A=1", "B", "A=2", "C=x=y"]
//!        |
//!        v  split at first '='
//! env:       { A: "2", C: "x=y" }    last occurrence wins
//! malformed: [ "B" ]                  logged, never fatal
//! ```

use super::container::Env;
use super::types::split_declaration;

/// A raw image declaration that was skipped because it has no `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedEntry {
    /// Position of the entry in the raw sequence.
    pub index: usize,
    /// The entry exactly as it appeared.
    pub raw: String,
}

/// Result of parsing image declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedImage {
    /// Variables that parsed successfully.
    pub env: Env,
    /// Entries that were skipped.
    pub malformed: Vec<MalformedEntry>,
}

impl ParsedImage {
    #[must_use]
    pub fn into_env(self) -> Env {
        self.env
    }
}

/// Parses raw `KEY=VALUE` declarations, keeping track of skipped entries.
///
/// Each entry is split at its first `=`; the value may contain further `=`.
/// Entries without `=` are skipped with a warning and recorded in
/// [`ParsedImage::malformed`]. Keys are accepted verbatim. This never fails.
#[must_use]
pub fn parse_image_env<I, S>(raw: I) -> ParsedImage
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = ParsedImage::default();

    for (index, entry) in raw.into_iter().enumerate() {
        let entry = entry.as_ref();
        match split_declaration(entry) {
            Some((key, value)) => {
                parsed.env.set(key, value);
            }
            None => {
                tracing::warn!(
                    environment_variable = %entry,
                    index,
                    "Cannot parse environment variable"
                );
                parsed.malformed.push(MalformedEntry {
                    index,
                    raw: entry.to_owned(),
                });
            }
        }
    }

    tracing::debug!(
        parsed = parsed.env.len(),
        skipped = parsed.malformed.len(),
        "Parsed image environment"
    );

    parsed
}

/// Parses raw `KEY=VALUE` declarations into an [`Env`].
///
/// See [`parse_image_env`] for the rules.
#[must_use]
pub fn parse<I, S>(raw: I) -> Env
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_image_env(raw).into_env()
}
