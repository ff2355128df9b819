use std::path::Path;

use crate::builtin::builtin_document;
use crate::error::SubsetError;
use crate::generator::{DEFAULT_OUTPUT, generate_with, render, write_document};
use crate::types::{DictionaryDocument, Entry};

fn run_quiet(path: &Path) -> Result<String, SubsetError> {
    let mut out = Vec::new();
    generate_with(path, &mut out)?;
    Ok(String::from_utf8(out).expect("progress output is UTF-8"))
}

#[test]
fn test_render_layout() {
    let document = DictionaryDocument::new(vec![Entry::new("凄い", "すごい", 100)]);
    let json = render(&document).unwrap();

    let expected = concat!(
        "{\n",
        "  \"entries\": [\n",
        "    {\n",
        "      \"kanji\": \"凄い\",\n",
        "      \"hiragana\": \"すごい\",\n",
        "      \"baseScore\": 100\n",
        "    }\n",
        "  ]\n",
        "}"
    );
    assert_eq!(json, expected);
}

#[test]
fn test_render_keeps_unicode_literal() {
    let json = render(&builtin_document()).unwrap();
    assert!(json.contains("美味しい"));
    assert!(json.contains("おいしい"));
    assert!(!json.contains("\\u"));
}

#[test]
fn test_generate_writes_builtin_subset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_OUTPUT);

    let progress = run_quiet(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let root = value.as_object().unwrap();
    assert_eq!(root.len(), 1);

    let entries = root["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 15);
    for entry in entries {
        let fields = entry.as_object().unwrap();
        assert_eq!(fields.len(), 3);
        assert!(!fields["kanji"].as_str().unwrap().is_empty());
        assert!(!fields["hiragana"].as_str().unwrap().is_empty());
        assert_eq!(fields["baseScore"].as_i64(), Some(100));
    }
    assert_eq!(
        entries[0],
        serde_json::json!({"kanji": "凄い", "hiragana": "すごい", "baseScore": 100})
    );
    assert_eq!(
        entries[14],
        serde_json::json!({"kanji": "浅い", "hiragana": "あさい", "baseScore": 100})
    );

    assert!(progress.starts_with("Generating IPADIC-compatible dictionary...\n"));
    assert!(progress.contains(&format!("Generated: {}\n", path.display())));
    assert!(progress.ends_with("Entries: 15\n"));
}

#[test]
fn test_generate_is_byte_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");

    run_quiet(&path).unwrap();
    let first = std::fs::read(&path).unwrap();
    run_quiet(&path).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
    assert!(!first.starts_with(&[0xEF, 0xBB, 0xBF]));
}

#[test]
fn test_generate_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    std::fs::write(&path, "x".repeat(64 * 1024)).unwrap();

    run_quiet(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render(&builtin_document()).unwrap());
}

#[test]
fn test_generate_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.json");

    let mut out = Vec::new();
    let err = generate_with(&path, &mut out).unwrap_err();

    match err {
        SubsetError::Io { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("Expected IO error, got {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn test_write_document_custom_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.json");
    let document = DictionaryDocument::new(vec![
        Entry::new("有難う", "ありがとう", 100),
        Entry::new("漢字", "かんじ", -5),
    ]);

    write_document(&path, &document).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: DictionaryDocument = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, document);
}

#[test]
fn test_io_error_message_leaves_cause_to_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.json");

    let err = generate_with(&path, &mut Vec::new()).unwrap_err();

    let message = err.to_string();
    assert_eq!(message, format!("IO error on {}", path.display()));
    let source = std::error::Error::source(&err).expect("IO error keeps its cause");
    assert!(!message.contains(&source.to_string()));
}
