// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for envfile-rs.

use crate::config::Config;

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display the configuration layers that were applied.
pub fn run_config_sources_command(sources: &[String]) {
    if sources.is_empty() {
        println!("No configuration sources, using defaults");
    } else {
        for line in sources {
            println!("{line}");
        }
    }
}
