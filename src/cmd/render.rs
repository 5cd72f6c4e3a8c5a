// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Render command implementation for envfile-rs.
//!
//! ```text
//! RenderArgs --collect_inputs--> (Env, raw image declarations)
//!            --parse_image_env--> ParsedImage
//!            --RenderOptions::render_env--> stdout | temp file --persist--> FILE
//! ```

use std::path::Path;

use anyhow::Context;

use crate::cli::render::RenderArgs;
use crate::config::Config;
use crate::core::env::{Env, parse_image_env};
use crate::error::{EnvFileResult, Result};
use crate::input::{read_env_file, read_image_config};
use crate::render::{KeyPolicy, RenderOptions, ShadowedPolicy};

/// Both environment layers gathered from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderInputs {
    /// Explicit variables.
    pub explicit: Env,
    /// Raw image declarations, in order.
    pub image_raw: Vec<String>,
}

/// Gathers the explicit and image layers named by `args`.
///
/// `--env` entries override `--env-file` entries. Declarations from
/// `--image-config` come before `--image-env` values.
///
/// # Errors
///
/// Returns an error if an input file cannot be read or is malformed.
pub fn collect_inputs(args: &RenderArgs) -> EnvFileResult<RenderInputs> {
    let mut explicit = match &args.env_file {
        Some(path) => read_env_file(path)?,
        None => Env::new(),
    };
    explicit.extend(args.env.iter().cloned());

    let mut image_raw = match &args.image_config {
        Some(path) => read_image_config(path)?,
        None => Vec::new(),
    };
    image_raw.extend(args.image_env.iter().cloned());

    Ok(RenderInputs {
        explicit,
        image_raw,
    })
}

/// Builds the render options from configuration and command-line flags.
#[must_use]
pub fn render_options(args: &RenderArgs, config: &Config) -> RenderOptions {
    let mut render = config.render.clone();
    if args.skip_shadowed {
        render.shadowed = ShadowedPolicy::Skip;
    }
    if args.skip_invalid_keys {
        render.keys = KeyPolicy::Skip;
    }
    render.to_options()
}

/// Main handler for render command.
///
/// # Errors
///
/// Returns an error if the inputs cannot be read, the document cannot be
/// rendered, or the output cannot be written.
pub fn run_render_command(args: &RenderArgs, config: &Config) -> Result<()> {
    let inputs = collect_inputs(args)?;
    let options = render_options(args, config);
    let image = parse_image_env(&inputs.image_raw);

    match &args.output {
        Some(path) => write_atomically(path, &options, &inputs.explicit, &image.env)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            options.render_env(&inputs.explicit, &image.env, &mut stdout)?;
        }
    }

    let output = args
        .output
        .as_ref()
        .map_or_else(|| "-".to_string(), |path| path.display().to_string());
    tracing::info!(
        output = %output,
        explicit = inputs.explicit.len(),
        image = image.env.len(),
        skipped = image.malformed.len(),
        "Rendered environment file"
    );

    Ok(())
}

/// Renders into a temporary file next to `path`, then renames it over `path`.
fn write_atomically(
    path: &Path,
    options: &RenderOptions,
    explicit: &Env,
    image: &Env,
) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    options.render_env(explicit, image, &mut file)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .with_context(|| format!("failed to set permissions on {}", file.path().display()))?;
    }

    file.persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
