//! Test harness for the JOT parser against fixture files.
//!
//! This harness reads all .json files from the test/ok/ directory,
//! parses them, and compares the rendered value against the matching
//! .expected file. It also reads .json files from test/bad/ (expected
//! to fail) and verifies they produce the message in the matching
//! .error file.

use std::fs;
use std::path::{Path, PathBuf};

use libjot::{parse, Kind, ParseError, Value};

/// Root fixture directory (workspace-level test/).
fn test_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("test")
}

/// All .json fixtures in a subdirectory of test/, sorted.
fn fixture_files(subdir: &str) -> Vec<PathBuf> {
    let pattern = test_root().join(subdir).join("*.json");
    let mut files: Vec<PathBuf> = glob::glob(pattern.to_str().unwrap())
        .expect("fixture glob pattern is invalid")
        .filter_map(|entry| entry.ok())
        .collect();
    files.sort();
    files
}

/// Run a single test/ok/ fixture (expected to parse).
fn run_ok_fixture(path: &Path) -> Result<(), String> {
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    let content =
        fs::read_to_string(path).map_err(|e| format!("{}: cannot read fixture: {}", name, e))?;
    let expected_path = path.with_extension("expected");
    let expected = fs::read_to_string(&expected_path)
        .map_err(|e| format!("{}: cannot read .expected file: {}", name, e))?;

    match parse(&content) {
        Ok(value) => {
            let actual = format!("{:?}", value);
            if actual != expected.trim() {
                return Err(format!(
                    "{}: output mismatch\n    expected: {}\n    actual:   {}",
                    name,
                    expected.trim(),
                    actual
                ));
            }
            Ok(())
        }
        Err(err) => Err(format!("{}: expected success, got error: {}", name, err)),
    }
}

/// Run a single test/bad/ fixture (expected to fail).
fn run_bad_fixture(path: &Path) -> Result<(), String> {
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    let content =
        fs::read_to_string(path).map_err(|e| format!("{}: cannot read fixture: {}", name, e))?;
    let error_path = path.with_extension("error");
    let expected = fs::read_to_string(&error_path)
        .map_err(|e| format!("{}: cannot read .error file: {}", name, e))?;

    match parse(&content) {
        Ok(value) => Err(format!(
            "{}: expected failure, parsed {:?}",
            name, value
        )),
        Err(err) => {
            let actual = err.to_string();
            if actual != expected.trim() {
                return Err(format!(
                    "{}: error mismatch\n    expected: {}\n    actual:   {}",
                    name,
                    expected.trim(),
                    actual
                ));
            }
            Ok(())
        }
    }
}

#[test]
fn ok_fixtures() {
    let files = fixture_files("ok");
    assert!(!files.is_empty(), "no fixtures found in test/ok/");

    let failures: Vec<String> = files
        .iter()
        .filter_map(|path| run_ok_fixture(path).err())
        .collect();
    if !failures.is_empty() {
        panic!("{} ok fixture(s) failed:\n{}", failures.len(), failures.join("\n"));
    }
}

#[test]
fn bad_fixtures() {
    let files = fixture_files("bad");
    assert!(!files.is_empty(), "no fixtures found in test/bad/");

    let failures: Vec<String> = files
        .iter()
        .filter_map(|path| run_bad_fixture(path).err())
        .collect();
    if !failures.is_empty() {
        panic!("{} bad fixture(s) failed:\n{}", failures.len(), failures.join("\n"));
    }
}

#[test]
fn empty_and_whitespace_inputs() {
    for input in ["", " ", "\t", " \t \n \r "] {
        assert_eq!(parse(input), Err(ParseError::ExpectValue), "input {:?}", input);
    }
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(parse("  true  "), Ok(Value::Bool(true)));
    assert_eq!(parse("\r\n-1.5e-3\r\n"), Ok(Value::Number(-0.0015)));
}

#[test]
fn trailing_content_is_rejected() {
    assert_eq!(parse("null x"), Err(ParseError::RootNotSingular));
    assert_eq!(parse("123abc"), Err(ParseError::RootNotSingular));
    assert_eq!(parse("0123"), Err(ParseError::RootNotSingular));
    assert_eq!(parse("1 2"), Err(ParseError::RootNotSingular));
    assert_eq!(parse("true false"), Err(ParseError::RootNotSingular));
}

#[test]
fn kinds_and_accessors() {
    let null = parse("null").unwrap();
    assert_eq!(null.kind(), Kind::Null);
    assert!(null.is_null());
    assert_eq!(null.as_bool(), None);
    assert_eq!(null.as_number(), None);

    let yes = parse("true").unwrap();
    assert_eq!(yes.kind(), Kind::True);
    assert_eq!(yes.as_bool(), Some(true));

    let no = parse("false").unwrap();
    assert_eq!(no.kind(), Kind::False);
    assert_eq!(no.as_bool(), Some(false));

    let pi = parse("3.14").unwrap();
    assert_eq!(pi.kind(), Kind::Number);
    assert_eq!(pi.as_number(), Some(3.14));
    assert_eq!(pi.as_bool(), None);
}

#[test]
fn parsing_is_idempotent() {
    for input in ["null", "  true  ", "3.14", "1e400", "0123", "nul", ""] {
        assert_eq!(parse(input), parse(input), "input {:?}", input);
    }
}
