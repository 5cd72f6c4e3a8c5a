// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Helpers for environment declarations.
//!
//! ```text
//! "KEY=VALUE=MORE" --split_declaration--> ("KEY", "VALUE=MORE")
//! "KEY"            --split_declaration--> None
//! is_posix_name:   [A-Za-z_][A-Za-z0-9_]*
//! ```

/// Separator between a variable name and its value.
pub const DECLARATION_SEPARATOR: char = '=';

/// Splits a `KEY=VALUE` declaration at the first `=`.
///
/// Returns `None` when the declaration has no separator. The key is not
/// validated and may be empty.
#[must_use]
pub fn split_declaration(raw: &str) -> Option<(&str, &str)> {
    raw.split_once(DECLARATION_SEPARATOR)
}

/// Returns true if `name` can be assigned by a POSIX shell.
#[must_use]
pub fn is_posix_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(first) if first == b'_' || first.is_ascii_alphabetic() => {
            bytes.all(|b| b == b'_' || b.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
