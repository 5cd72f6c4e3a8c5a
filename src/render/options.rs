// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rendering options.
//!
//! ```text
//! RenderOptions (immutable, built per call)
//!   header         first comment line(s)
//!   image_comment  comment above the image section
//!   shadowed       Keep (default) | Skip   image keys also set explicitly
//!   keys           Emit (default) | Skip   names that are not POSIX names
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default header comment.
pub const DEFAULT_HEADER: &str = "This file was autogenerated by envfile";

/// Default comment above the image section.
pub const DEFAULT_IMAGE_COMMENT: &str =
    "These environment variables were in your image configuration";

/// What to do with image variables whose name is also set explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowedPolicy {
    /// Emit the fallback line anyway. The explicit export runs first, so the
    /// fallback never takes effect.
    #[default]
    Keep,
    /// Leave the fallback line out.
    Skip,
}

impl std::fmt::Display for ShadowedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keep => write!(f, "keep"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

impl std::str::FromStr for ShadowedPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep" => Ok(Self::Keep),
            "skip" => Ok(Self::Skip),
            _ => Err(ConfigError::InvalidValue {
                section: "render".to_string(),
                key: "shadowed".to_string(),
                message: format!("expected 'keep' or 'skip', got '{s}'"),
            }),
        }
    }
}

/// What to do with variable names a POSIX shell cannot assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPolicy {
    /// Render the name verbatim and log a warning.
    #[default]
    Emit,
    /// Drop the variable and log a warning.
    Skip,
}

impl std::fmt::Display for KeyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Emit => write!(f, "emit"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

impl std::str::FromStr for KeyPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "emit" => Ok(Self::Emit),
            "skip" => Ok(Self::Skip),
            _ => Err(ConfigError::InvalidValue {
                section: "render".to_string(),
                key: "keys".to_string(),
                message: format!("expected 'emit' or 'skip', got '{s}'"),
            }),
        }
    }
}

/// Options for a single render.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct RenderOptions {
    #[builder(into, setters(name = with_header), default = String::from(DEFAULT_HEADER))]
    header: String,
    #[builder(into, setters(name = with_image_comment), default = String::from(DEFAULT_IMAGE_COMMENT))]
    image_comment: String,
    #[builder(setters(name = with_shadowed), default)]
    shadowed: ShadowedPolicy,
    #[builder(setters(name = with_keys), default)]
    keys: KeyPolicy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RenderOptions {
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    #[must_use]
    pub fn image_comment(&self) -> &str {
        &self.image_comment
    }

    #[must_use]
    pub const fn shadowed(&self) -> ShadowedPolicy {
        self.shadowed
    }

    #[must_use]
    pub const fn keys(&self) -> KeyPolicy {
        self.keys
    }
}
