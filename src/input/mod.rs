// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Input adapters for the command-line front end.
//!
//! ```text
//! --env-file FILE      KEY=VALUE lines        --> Env (strict: no '=' is an error)
//! --image-config FILE  image metadata JSON    --> Vec<String> raw declarations
//!
//! Accepted image metadata shapes:
//!   [ { "Config": { "Env": [...] } } ]   image inspect output (one image)
//!   { "Config": { "Env": [...] } }       single inspect object
//!   { "config": { "Env": [...] } }       OCI image config
//!   { "Env": [...] }                     bare container config
//! ```
//!
//! Raw image declarations are not validated here; the image parser decides
//! which ones are usable.


use serde::Deserialize;
use std::path::Path;

use crate::core::env::Env;
use crate::core::env::types::split_declaration;
use crate::error::InputError;

/// Container configuration section of image metadata.
#[derive(Debug, Default, Deserialize)]
struct ContainerConfig {
    #[serde(rename = "Env", default)]
    env: Option<Vec<String>>,
}

/// One image as described by image metadata.
#[derive(Debug, Default, Deserialize)]
struct ImageMetadata {
    #[serde(rename = "Config", alias = "config", default)]
    config: Option<ContainerConfig>,
    #[serde(rename = "Env", default)]
    env: Option<Vec<String>>,
}

impl ImageMetadata {
    fn into_env(self) -> Vec<String> {
        self.config
            .and_then(|config| config.env)
            .or(self.env)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImageDocument {
    Many(Vec<ImageMetadata>),
    One(ImageMetadata),
}

/// Extracts raw environment declarations from image metadata JSON.
///
/// `origin` names the source in error messages.
///
/// # Errors
///
/// Returns [`InputError::InvalidImageConfig`] if the JSON does not describe
/// exactly one image.
pub fn image_env_from_json(origin: &str, json: &str) -> Result<Vec<String>, InputError> {
    let invalid = |message: String| InputError::InvalidImageConfig {
        path: origin.to_string(),
        message,
    };

    let document: ImageDocument =
        serde_json::from_str(json).map_err(|e| invalid(e.to_string()))?;

    let image = match document {
        ImageDocument::One(image) => image,
        ImageDocument::Many(mut images) => match images.len() {
            1 => images.remove(0),
            0 => return Err(invalid("no image found".to_string())),
            n => return Err(invalid(format!("expected a single image, found {n}"))),
        },
    };

    let env = image.into_env();
    tracing::debug!(origin, declarations = env.len(), "Read image configuration");
    Ok(env)
}

/// Reads raw environment declarations from an image metadata file.
///
/// # Errors
///
/// Returns [`InputError::ReadFailed`] if the file cannot be read and
/// [`InputError::InvalidImageConfig`] if its content is not usable.
pub fn read_image_config(path: &Path) -> Result<Vec<String>, InputError> {
    let origin = path.display().to_string();
    let json = std::fs::read_to_string(path).map_err(|source| InputError::ReadFailed {
        path: origin.clone(),
        source,
    })?;
    image_env_from_json(&origin, &json)
}

/// Parses explicit `KEY=VALUE` lines.
///
/// Blank lines and lines whose first non-blank character is `#` are skipped.
/// Leading whitespace before the name is ignored. Values are taken verbatim
/// up to the end of the line; later lines override earlier ones.
///
/// # Errors
///
/// Returns [`InputError::MissingDelimiter`] for a line without `=`.
pub fn parse_env_lines(origin: &str, content: &str) -> Result<Env, InputError> {
    let mut env = Env::new();

    for (number, line) in content.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (key, value) =
            split_declaration(trimmed).ok_or_else(|| InputError::MissingDelimiter {
                origin: format!("{origin}:{}", number + 1),
                entry: line.to_string(),
            })?;
        env.set(key, value);
    }

    Ok(env)
}

/// Reads explicit variables from a `KEY=VALUE` file.
///
/// # Errors
///
/// Returns [`InputError::ReadFailed`] if the file cannot be read and
/// [`InputError::MissingDelimiter`] for a line without `=`.
pub fn read_env_file(path: &Path) -> Result<Env, InputError> {
    let origin = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| InputError::ReadFailed {
        path: origin.clone(),
        source,
    })?;
    parse_env_lines(&origin, &content)
}
