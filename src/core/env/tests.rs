// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use super::container::Env;
use super::image::{MalformedEntry, parse, parse_image_env};
use super::types::{is_posix_name, split_declaration};
use std::collections::BTreeMap;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar");

    assert_eq!(env.get("FOO"), Some("bar"));
    assert_eq!(env.get("foo"), None, "names are case-sensitive");
    assert_eq!(env.get("NOTEXIST"), None);
    assert!(env.contains("FOO"));

    env.remove("FOO");
    assert!(env.is_empty());
}

#[test]
fn test_env_set_replaces() {
    let mut env = Env::new();
    env.set("KEY", "first").set("KEY", "second");

    assert_eq!(env.get("KEY"), Some("second"));
    assert_eq!(env.len(), 1);
}

#[test]
fn test_env_iterates_in_name_order() {
    let env: Env = [("b", "2"), ("B", "1"), ("_a", "3"), ("a", "4")]
        .into_iter()
        .collect();

    let keys: Vec<_> = env.keys().collect();
    assert_eq!(keys, vec!["B", "_a", "a", "b"]);
}

#[test]
fn test_env_from_map() {
    let mut map = BTreeMap::new();
    map.insert("KEY1".to_string(), "value1".to_string());
    map.insert("KEY2".to_string(), "value2".to_string());

    let env = Env::from_map(map.clone());

    assert_eq!(env.len(), 2);
    assert_eq!(env.to_map(), map);
}

#[test]
fn test_split_declaration() {
    assert_eq!(split_declaration("A=1"), Some(("A", "1")));
    assert_eq!(split_declaration("A=x=y"), Some(("A", "x=y")));
    assert_eq!(split_declaration("A="), Some(("A", "")));
    assert_eq!(split_declaration("=v"), Some(("", "v")));
    assert_eq!(split_declaration("A"), None);
    assert_eq!(split_declaration(""), None);
}

#[test]
fn test_is_posix_name() {
    for name in ["A", "_", "_a1", "PATH", "lower_case"] {
        assert!(is_posix_name(name), "{name} should be a valid name");
    }
    for name in ["", "1A", "A-B", "A B", "A;B", "É"] {
        assert!(!is_posix_name(name), "{name} should be rejected");
    }
}

#[test]
fn test_parse_skips_malformed_and_continues() {
    let parsed = parse_image_env(["A=1", "B", "C=3"]);

    assert_eq!(parsed.env.get("A"), Some("1"));
    assert_eq!(parsed.env.get("B"), None);
    assert_eq!(parsed.env.get("C"), Some("3"));
    assert_eq!(
        parsed.malformed,
        vec![MalformedEntry {
            index: 1,
            raw: "B".to_string(),
        }]
    );
}

#[test]
fn test_parse_warns_about_each_malformed_entry() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let parsed = tracing::subscriber::with_default(subscriber, || {
        parse_image_env(["A=1", "B", "C=3", "D"])
    });
    assert_eq!(parsed.malformed.len(), 2);

    let output = logs.contents();
    let warnings: Vec<&str> = output.lines().collect();
    assert_eq!(warnings.len(), 2, "{output}");
    assert!(warnings[0].contains("WARN"), "{output}");
    assert!(warnings[0].contains("Cannot parse environment variable"), "{output}");
    assert!(warnings[0].contains("environment_variable=B"), "{output}");
    assert!(warnings[0].contains("index=1"), "{output}");
    assert!(warnings[1].contains("environment_variable=D"), "{output}");
    assert!(warnings[1].contains("index=3"), "{output}");
}

#[test]
fn test_parse_last_duplicate_wins() {
    let env = parse(["A=first", "B=x", "A=second", "A=third"]);

    assert_eq!(env.get("A"), Some("third"));
    assert_eq!(env.len(), 2);
}

#[test]
fn test_parse_keeps_equals_in_value() {
    let env = parse(["JAVA_OPTS=-Dfoo=bar -Dbaz=qux", "EMPTY="]);

    assert_eq!(env.get("JAVA_OPTS"), Some("-Dfoo=bar -Dbaz=qux"));
    assert_eq!(env.get("EMPTY"), Some(""));
}

#[test]
fn test_parse_accepts_any_key_shape() {
    let env = parse(["=orphan", "not a name=1"]);

    assert_eq!(env.get(""), Some("orphan"));
    assert_eq!(env.get("not a name"), Some("1"));
}

#[test]
fn test_parse_empty_input() {
    let parsed = parse_image_env(Vec::<String>::new());

    assert!(parsed.env.is_empty());
    assert!(parsed.malformed.is_empty());
}

#[test]
fn test_parse_all_malformed() {
    let parsed = parse_image_env(vec!["NOPE".to_string(), String::new()]);

    assert!(parsed.env.is_empty());
    let raws: Vec<_> = parsed.malformed.iter().map(|m| m.raw.as_str()).collect();
    assert_eq!(raws, vec!["NOPE", ""]);
}
