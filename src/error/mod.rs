// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          EnvFileError (~24 bytes)
//!                 |
//!   +------+------+------+
//!   |      |      |      |
//!   v      v      v      v
//! Render Config Input   Io
//!  Box    Box    Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Render  Format, Write
//!   Config  InvalidValue
//!   Input   ReadFailed, MissingDelimiter, InvalidImageConfig
//! ```
//!
//! A malformed image declaration is not an error: the parser skips it and
//! logs a warning.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvFileError`].
pub type EnvFileResult<T> = std::result::Result<T, EnvFileError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnvFileError {
    /// Rendering the environment file failed.
    #[error("render error: {0}")]
    Render(#[from] Box<RenderError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Invalid input handed to the front end.
    #[error("input error: {0}")]
    Input(#[from] Box<InputError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvFileError {
                fn from(err: $error) -> Self {
                    EnvFileError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    RenderError => Render,
    ConfigError => Config,
    InputError => Input,
    std::io::Error => Io,
}

// --- Render Errors ---

/// Errors raised while assembling or emitting an environment file.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The in-memory document could not be assembled.
    #[error("failed to assemble environment file: {0}")]
    Format(#[from] std::fmt::Error),

    /// The output sink rejected the document.
    #[error("failed to write environment file: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Input Errors ---

/// Errors in the inputs handed to the command-line front end.
#[derive(Debug, Error)]
pub enum InputError {
    /// An input file could not be read.
    #[error("failed to read '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An explicit entry has no `=` separator.
    #[error("{origin}: expected KEY=VALUE, got '{entry}'")]
    MissingDelimiter { origin: String, entry: String },

    /// The image metadata file is not usable.
    #[error("invalid image configuration '{path}': {message}")]
    InvalidImageConfig { path: String, message: String },
}
