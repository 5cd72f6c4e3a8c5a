// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the render module.

use super::quote::{quote, quote_with_fallback};
use super::{KeyPolicy, RenderOptions, ShadowedPolicy, render};
use crate::core::env::Env;
use crate::error::RenderError;

fn env(pairs: &[(&str, &str)]) -> Env {
    pairs.iter().copied().collect()
}

fn render_default(explicit: &Env, image: &[&str]) -> String {
    RenderOptions::default()
        .render_to_string(explicit, image)
        .expect("render should succeed")
}

// =============================================================================
// Quoting
// =============================================================================

#[test]
fn test_quote_values() {
    let cases = [
        ("", "''"),
        ("1", "'1'"),
        ("bar baz", "'bar baz'"),
        ("it's", r#"'it'"'"'s'"#),
        ("''", r#"''"'"''"'"''"#),
        ("$HOME", "'$HOME'"),
        ("`id`", "'`id`'"),
        ("$(id)", "'$(id)'"),
        ("a\nb", "'a\nb'"),
        ("*", "'*'"),
        (r"back\slash", r"'back\slash'"),
        ("\"double\"", "'\"double\"'"),
        ("héllo wörld", "'héllo wörld'"),
    ];

    for (value, expected) in cases {
        assert_eq!(quote(value), expected, "quoting {value:?}");
    }
}

#[test]
fn test_quote_with_fallback() {
    assert_eq!(quote_with_fallback("A", "1"), "${A-'1'}");
    assert_eq!(quote_with_fallback("X", ""), "${X-''}");
    insta::assert_snapshot!(
        quote_with_fallback("X", "it's"),
        @r#"${X-'it'"'"'s'}"#
    );
}

// =============================================================================
// Document layout
// =============================================================================

#[test]
fn test_render_explicit_only() {
    let doc = render_default(&env(&[("FOO", "bar baz")]), &[]);

    assert_eq!(
        doc,
        "# This file was autogenerated by envfile\n\nexport FOO='bar baz'\n"
    );
    assert!(!doc.contains("image configuration"));
}

#[test]
fn test_render_image_only_skips_malformed() {
    let doc = render_default(&Env::new(), &["A=1", "B"]);

    insta::assert_snapshot!(doc, @r#"
    # This file was autogenerated by envfile


    # These environment variables were in your image configuration
    export A=${A-'1'}
    "#);
    assert_eq!(doc.matches("export ").count(), 1);
    assert!(doc.ends_with("export A=${A-'1'}\n"));
}

#[test]
fn test_render_shadowed_key_keeps_both_lines() {
    let doc = render_default(&env(&[("X", "it's")]), &["X=default"]);

    assert_eq!(
        doc,
        concat!(
            "# This file was autogenerated by envfile\n",
            "\n",
            "export X='it'\"'\"'s'\n",
            "\n",
            "# These environment variables were in your image configuration\n",
            "export X=${X-'default'}\n",
        )
    );

    let explicit_line = doc.find("export X='it'").expect("explicit line");
    let fallback_line = doc.find("export X=${X-").expect("fallback line");
    assert!(explicit_line < fallback_line);
}

#[test]
fn test_render_shadowed_skip_drops_fallback() {
    let options = RenderOptions::builder()
        .with_shadowed(ShadowedPolicy::Skip)
        .build();
    let doc = options
        .render_to_string(&env(&[("X", "it's")]), &["X=default", "Y=2"])
        .unwrap();

    assert!(!doc.contains("${X-"));
    assert!(doc.contains("export Y=${Y-'2'}\n"));
}

#[test]
fn test_render_shadowed_skip_omits_empty_section() {
    let options = RenderOptions::builder()
        .with_shadowed(ShadowedPolicy::Skip)
        .build();
    let doc = options
        .render_to_string(&env(&[("X", "1")]), &["X=default"])
        .unwrap();

    assert_eq!(
        doc,
        "# This file was autogenerated by envfile\n\nexport X='1'\n"
    );
}

#[test]
fn test_render_empty_inputs() {
    let doc = render_default(&Env::new(), &[]);
    assert_eq!(doc, "# This file was autogenerated by envfile\n\n");
}

#[test]
fn test_render_all_malformed_has_no_image_section() {
    let doc = render_default(&env(&[("A", "1")]), &["B", "C"]);
    assert!(!doc.contains("image configuration"));
    assert!(!doc.contains("${"));
}

#[test]
fn test_render_orders_by_name() {
    let doc = render_default(
        &env(&[("ZED", "z"), ("ALPHA", "a")]),
        &["MID=m", "BETA=b", "BETA=b2"],
    );

    insta::assert_snapshot!(doc, @r#"
    # This file was autogenerated by envfile

    export ALPHA='a'
    export ZED='z'

    # These environment variables were in your image configuration
    export BETA=${BETA-'b2'}
    export MID=${MID-'m'}
    "#);
}

#[test]
fn test_render_is_idempotent() {
    let explicit = env(&[("A", "1"), ("B", "two words"), ("C", "it's")]);
    let image = ["C=img", "D=$(id)", "broken", "E=x=y"];

    let first = render_default(&explicit, &image);
    let second = render_default(&explicit, &image);
    assert_eq!(first, second);
}

#[test]
fn test_render_custom_comments() {
    let options = RenderOptions::builder()
        .with_header("Generated\nDo not edit")
        .with_image_comment("")
        .build();
    let doc = options.render_to_string(&Env::new(), &["A=1"]).unwrap();

    assert_eq!(
        doc,
        "# Generated\n# Do not edit\n\n\n#\nexport A=${A-'1'}\n"
    );
}

// =============================================================================
// Key policy
// =============================================================================

#[test]
fn test_render_invalid_key_emitted_by_default() {
    let doc = render_default(&env(&[("BAD-NAME", "1")]), &["also bad=2"]);

    assert!(doc.contains("export BAD-NAME='1'\n"));
    assert!(doc.contains("export also bad=${also bad-'2'}\n"));
}

#[test]
fn test_render_invalid_key_skipped() {
    let options = RenderOptions::builder().with_keys(KeyPolicy::Skip).build();
    let doc = options
        .render_to_string(&env(&[("BAD-NAME", "1"), ("GOOD", "2")]), &["=x", "OK=3"])
        .unwrap();

    assert!(!doc.contains("BAD-NAME"));
    assert!(!doc.contains("export ="));
    assert!(doc.contains("export GOOD='2'\n"));
    assert!(doc.contains("export OK=${OK-'3'}\n"));
}

#[test]
fn test_render_key_with_line_break_never_emitted() {
    let image = ["A\necho INJECTED\nB=x", "TAB\tKEY=y", "OK=1"];
    let explicit = env(&[("X\nid", "1"), ("BELL\u{7}", "2")]);

    for keys in [KeyPolicy::Emit, KeyPolicy::Skip] {
        let doc = RenderOptions::builder()
            .with_keys(keys)
            .build()
            .render_to_string(&explicit, &image)
            .unwrap();

        assert!(!doc.contains("INJECTED"), "{keys}: {doc}");
        assert!(!doc.contains("export X"), "{keys}: {doc}");
        assert!(!doc.contains('\t'), "{keys}: {doc}");
        assert!(!doc.contains('\u{7}'), "{keys}: {doc}");
        assert_eq!(doc.lines().filter(|l| l.starts_with("export ")).count(), 1);
        assert!(doc.ends_with("export OK=${OK-'1'}\n"), "{keys}: {doc}");
    }
}

#[test]
fn test_policy_parse_and_display() {
    assert_eq!("skip".parse::<ShadowedPolicy>().unwrap(), ShadowedPolicy::Skip);
    assert_eq!("KEEP".parse::<ShadowedPolicy>().unwrap(), ShadowedPolicy::Keep);
    assert!("drop".parse::<ShadowedPolicy>().is_err());
    assert_eq!("emit".parse::<KeyPolicy>().unwrap(), KeyPolicy::Emit);
    assert!("ignore".parse::<KeyPolicy>().is_err());

    assert_eq!(ShadowedPolicy::default().to_string(), "keep");
    assert_eq!(KeyPolicy::default().to_string(), "emit");
}

// =============================================================================
// Sink handling
// =============================================================================

struct RejectingSink;

impl std::io::Write for RejectingSink {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only sink",
        ))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_render_writes_into_sink() {
    let mut sink = Vec::new();
    render(&env(&[("FOO", "bar")]), &["A=1"], &mut sink).unwrap();

    let written = String::from_utf8(sink).unwrap();
    assert_eq!(written, render_default(&env(&[("FOO", "bar")]), &["A=1"]));
}

#[test]
fn test_render_surfaces_sink_failure() {
    let err = render(&Env::new(), &["A=1"], &mut RejectingSink).unwrap_err();

    match err {
        RenderError::Write { source } => {
            assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
        }
        RenderError::Format(_) => panic!("expected a write error"),
    }
}
