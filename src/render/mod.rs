// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment file rendering.
//!
//! # Document Layout
//!
//! ```text
//! # <header>
//!
//! export A='explicit'              one per explicit variable
//! export B='it'"'"'s'
//!
//! # <image comment>                only if any image declaration parsed
//! export C=${C-'image default'}    one per parsed image variable
//! ```
//!
//! # Precedence
//!
//! ```text
//! explicit export      unconditional, always wins
//! sourcing shell env   kept by ${KEY-...} when KEY is already set
//! image default        used only when KEY is unset
//! ```
//!
//! The document is assembled in memory and written to the sink in one go,
//! so a failed assembly writes nothing. The sink is borrowed, never closed.

pub mod options;
pub mod quote;

#[cfg(test)]
mod tests;

use std::fmt::Write as _;
use std::io::Write;

use crate::core::env::types::is_posix_name;
use crate::core::env::{Env, parse_image_env};
use crate::error::RenderError;

pub use options::{KeyPolicy, RenderOptions, ShadowedPolicy};
use quote::{quote, quote_with_fallback};

/// Renders an environment file with default options into `sink`.
///
/// # Errors
///
/// Returns [`RenderError`] if the document cannot be assembled or the sink
/// rejects the write.
pub fn render<W, S>(explicit: &Env, image_raw: &[S], sink: &mut W) -> Result<(), RenderError>
where
    W: Write + ?Sized,
    S: AsRef<str>,
{
    RenderOptions::default().render(explicit, image_raw, sink)
}

impl RenderOptions {
    /// Renders an environment file into `sink`.
    ///
    /// `image_raw` holds the raw `KEY=VALUE` declarations from the image;
    /// entries without `=` are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Format`] if the document cannot be assembled and
    /// [`RenderError::Write`] if the sink rejects it.
    pub fn render<W, S>(
        &self,
        explicit: &Env,
        image_raw: &[S],
        sink: &mut W,
    ) -> Result<(), RenderError>
    where
        W: Write + ?Sized,
        S: AsRef<str>,
    {
        let image = parse_image_env(image_raw).into_env();
        self.render_env(explicit, &image, sink)
    }

    /// Renders an environment file from an already parsed image environment.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Format`] if the document cannot be assembled and
    /// [`RenderError::Write`] if the sink rejects it.
    pub fn render_env<W>(
        &self,
        explicit: &Env,
        image: &Env,
        sink: &mut W,
    ) -> Result<(), RenderError>
    where
        W: Write + ?Sized,
    {
        let document = self.assemble(explicit, image)?;

        sink.write_all(document.as_bytes())
            .and_then(|()| sink.flush())
            .map_err(|source| RenderError::Write { source })
    }

    /// Renders an environment file into a new string.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Format`] if the document cannot be assembled.
    pub fn render_to_string<S>(
        &self,
        explicit: &Env,
        image_raw: &[S],
    ) -> Result<String, RenderError>
    where
        S: AsRef<str>,
    {
        let image = parse_image_env(image_raw).into_env();
        self.assemble(explicit, &image)
    }

    /// Assembles the document from an explicit and an already parsed image
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Format`] if writing into the buffer fails.
    pub fn assemble(&self, explicit: &Env, image: &Env) -> Result<String, RenderError> {
        let mut doc = String::new();

        write_comment(&mut doc, self.header())?;
        writeln!(doc)?;

        let mut exported = 0usize;
        for (key, value) in explicit.iter().filter(|(key, _)| self.accepts_key(key)) {
            writeln!(doc, "export {key}={}", quote(value))?;
            exported += 1;
        }

        let keep_shadowed = self.shadowed() == ShadowedPolicy::Keep;
        let fallbacks: Vec<_> = image
            .iter()
            .filter(|(key, _)| keep_shadowed || !explicit.contains(key))
            .filter(|(key, _)| self.accepts_key(key))
            .collect();

        if !fallbacks.is_empty() {
            writeln!(doc)?;
            write_comment(&mut doc, self.image_comment())?;
            for (key, value) in &fallbacks {
                writeln!(doc, "export {key}={}", quote_with_fallback(key, value))?;
            }
        }

        tracing::debug!(
            explicit = exported,
            image = fallbacks.len(),
            bytes = doc.len(),
            "Rendered environment file"
        );

        Ok(doc)
    }

    /// Applies the key policy, warning about names a shell cannot assign.
    ///
    /// Names with control characters are dropped under every policy: a line
    /// break in a name would end the `export` statement early.
    fn accepts_key(&self, key: &str) -> bool {
        if is_posix_name(key) {
            return true;
        }
        if key.chars().any(char::is_control) {
            tracing::warn!(key = ?key, "Skipping variable with control characters in its name");
            return false;
        }

        match self.keys() {
            KeyPolicy::Emit => {
                tracing::warn!(key = %key, "Variable name is not a valid shell name");
                true
            }
            KeyPolicy::Skip => {
                tracing::warn!(key = %key, "Skipping variable with invalid shell name");
                false
            }
        }
    }
}

/// Writes `text` as comment lines, one `# ` prefix per line.
fn write_comment(doc: &mut String, text: &str) -> std::fmt::Result {
    if text.is_empty() {
        return writeln!(doc, "#");
    }
    for line in text.lines() {
        if line.is_empty() {
            writeln!(doc, "#")?;
        } else {
            writeln!(doc, "# {line}")?;
        }
    }
    Ok(())
}
