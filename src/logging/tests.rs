// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogFormat, LogLevel};

#[test]
fn test_log_level_filters() {
    let filters: Vec<_> = (0..=6)
        .map(|level| {
            let level = LogLevel::from_u8(level).unwrap();
            (level.as_u8(), level.to_filter_string())
        })
        .collect();

    insta::assert_debug_snapshot!(filters, @r#"
    [
        (
            0,
            "off",
        ),
        (
            1,
            "error",
        ),
        (
            2,
            "warn",
        ),
        (
            3,
            "warn,envfile_rs=info",
        ),
        (
            4,
            "warn,envfile_rs=debug",
        ),
        (
            5,
            "warn,envfile_rs=trace",
        ),
        (
            6,
            "trace",
        ),
    ]
    "#);
}

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::from_u8(7), None);
    assert_eq!(LogLevel::try_from(2).unwrap(), LogLevel::WARN);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();

    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), None);
    assert!(!config.show_target());
    assert_eq!(config.format(), LogFormat::Text);
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::SILENT)
        .with_log_file("logs/envfile.log".to_string())
        .with_format(LogFormat::Json)
        .build();

    assert_eq!(config.console_level(), LogLevel::SILENT);
    assert_eq!(config.log_file(), Some("logs/envfile.log"));
    assert_eq!(config.format().to_string(), "json");
}
