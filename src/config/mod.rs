// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envfile-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envfile.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. ENVFILE_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVFILE_GLOBAL__OUTPUT_LOG_LEVEL=4  → global.output_log_level = 4
//! ENVFILE_RENDER__SHADOWED=skip       → render.shadowed = "skip"
//! ENVFILE_RENDER__IMAGE_COMMENT=...   → render.image_comment = "..."
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use types::{GlobalConfig, RenderConfig};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "envfile.toml";

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "ENVFILE";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Rendering options.
    pub render: RenderConfig,
}

impl Config {
    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_render_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global.log_file.display().to_string(),
        );
        options.insert(
            "global.log_format".into(),
            self.global.log_format.to_string(),
        );
    }

    fn format_render_options(&self, options: &mut BTreeMap<String, String>) {
        // Comments may span lines; show them escaped so each option stays on one line.
        options.insert(
            "render.header".into(),
            self.render.header.escape_default().to_string(),
        );
        options.insert(
            "render.image_comment".into(),
            self.render.image_comment.escape_default().to_string(),
        );
        options.insert("render.shadowed".into(), self.render.shadowed.to_string());
        options.insert("render.keys".into(), self.render.keys.to_string());
    }
}
