// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional("envfile.toml")   [default]
//!   .add_toml_file(--config)                  [file]
//!   .with_env_prefix("ENVFILE")               [env]   one per variable found
//!   .set(key, flag value)                     [flag]
//!        |
//!        v
//!    build() --> Config
//! ```
//!
//! Every layer that contributes is recorded as a [`ConfigSource`], so
//! `envfile config-sources` shows why an option has its value.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Environment, File, FileFormat};

use super::Config;
use crate::error::Result;

/// A layer that contributed to the configuration, in load order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Optional file that was found, usually `envfile.toml`.
    Default(PathBuf),
    /// File named with `--config`; must exist.
    File(PathBuf),
    /// A `<PREFIX>_<SECTION>__<KEY>` variable set in the environment.
    Environment(String),
    /// A single key overridden from the command line.
    Override(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default(path) => write!(f, "[default] {}", path.display()),
            Self::File(path) => write!(f, "[file] {}", path.display()),
            Self::Environment(name) => write!(f, "[env] {name}"),
            Self::Override(key) => write!(f, "[flag] {key}"),
        }
    }
}

/// Builder for the layered configuration.
///
/// # Example
///
/// ```no_run
/// use envfile_rs::config::loader::ConfigLoader;
///
/// let config = ConfigLoader::new()
///     .add_toml_file_optional("envfile.toml")
///     .with_env_prefix("ENVFILE")
///     .set("render.shadowed", "skip")?
///     .build()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    /// Adds a TOML file that must exist when `build()` is called.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        self.sources.push(ConfigSource::File(path.to_path_buf()));
        self
    }

    /// Adds a TOML file that is skipped when missing.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(false));
        if path.exists() {
            self.sources.push(ConfigSource::Default(path.to_path_buf()));
        }
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` environment variables on `build()`.
    ///
    /// The variables present now are recorded as sources, sorted by name.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        let lead = format!("{prefix}_");
        let mut names: Vec<String> = std::env::vars_os()
            .filter_map(|(name, _)| name.into_string().ok())
            .filter(|name| name.starts_with(&lead))
            .collect();
        names.sort();

        self.sources
            .extend(names.into_iter().map(ConfigSource::Environment));
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Overrides a single key, above every other layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not a valid configuration path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .with_context(|| format!("invalid config override '{key}'"))?;
        self.sources.push(ConfigSource::Override(key.to_string()));
        Ok(self)
    }

    /// Merges all layers into a [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing or not valid TOML, or if
    /// the merged values do not match [`Config`], including unknown keys
    /// coming from `<PREFIX>_*` variables.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };

        builder
            .build()
            .context("failed to load configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }

    #[must_use]
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Numbered source lines, lowest priority first.
    #[must_use]
    pub fn format_sources(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
