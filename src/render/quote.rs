// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell quoting.
//!
//! ```text
//! value          quote()              quote_with_fallback("K", value)
//! ""         --> ''                   ${K-''}
//! bar baz    --> 'bar baz'            ${K-'bar baz'}
//! it's       --> 'it'"'"'s'           ${K-'it'"'"'s'}
//! $HOME `id` --> '$HOME `id`'         ${K-'$HOME `id`'}
//! ```
//!
//! Inside single quotes a POSIX shell performs no expansion at all, so the
//! only character that needs care is the single quote itself: close the
//! quoted string, emit a double-quoted `'`, and reopen.

/// Replacement for a single quote inside a single-quoted string.
const ESCAPED_SINGLE_QUOTE: &str = r#"'"'"'"#;

/// Quotes `value` so a POSIX shell reads it back byte for byte.
///
/// The result is always wrapped in single quotes, including for values that
/// would be safe unquoted and for the empty string (`''`).
///
/// # Example
/// ```
/// use envfile_rs::render::quote::quote;
///
/// assert_eq!(quote("it's"), r#"'it'"'"'s'"#);
/// assert_eq!(quote(""), "''");
/// ```
#[must_use]
pub fn quote(value: &str) -> String {
    let quotes = value.matches('\'').count();
    let mut quoted =
        String::with_capacity(value.len() + 2 + quotes * (ESCAPED_SINGLE_QUOTE.len() - 1));

    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' {
            quoted.push_str(ESCAPED_SINGLE_QUOTE);
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');

    quoted
}

/// Builds the `${KEY-'value'}` expansion used for image defaults.
///
/// The shell keeps the current value of `KEY` when it is set (even to the
/// empty string) and only falls back to `value` when `KEY` is unset. The key
/// is emitted verbatim.
#[must_use]
pub fn quote_with_fallback(key: &str, value: &str) -> String {
    format!("${{{key}-{}}}", quote(value))
}
