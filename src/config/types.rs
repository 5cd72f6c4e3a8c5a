// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for envfile-rs.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, RenderConfig
//! GlobalConfig: log levels, log file, console format
//! RenderConfig: comments, shadowed-key policy, key policy
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::{LogFormat, LogLevel};
use crate::render::options::{DEFAULT_HEADER, DEFAULT_IMAGE_COMMENT};
use crate::render::{KeyPolicy, RenderOptions, ShadowedPolicy};

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. Empty disables file logging.
    pub log_file: PathBuf,
    /// Console log format.
    pub log_format: LogFormat,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::DEBUG,
            log_file: PathBuf::new(),
            log_format: LogFormat::default(),
        }
    }
}

impl GlobalConfig {
    /// Returns the log file path, or `None` when file logging is disabled.
    #[must_use]
    pub fn log_file(&self) -> Option<&std::path::Path> {
        (!self.log_file.as_os_str().is_empty()).then_some(self.log_file.as_path())
    }
}

/// Environment file rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Header comment text.
    pub header: String,
    /// Comment above the image section.
    pub image_comment: String,
    /// Image variables also set explicitly.
    pub shadowed: ShadowedPolicy,
    /// Variable names a POSIX shell cannot assign.
    pub keys: KeyPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            image_comment: DEFAULT_IMAGE_COMMENT.to_string(),
            shadowed: ShadowedPolicy::default(),
            keys: KeyPolicy::default(),
        }
    }
}

impl RenderConfig {
    /// Builds the options for a single render.
    #[must_use]
    pub fn to_options(&self) -> RenderOptions {
        RenderOptions::builder()
            .with_header(self.header.clone())
            .with_image_comment(self.image_comment.clone())
            .with_shadowed(self.shadowed)
            .with_keys(self.keys)
            .build()
    }
}
