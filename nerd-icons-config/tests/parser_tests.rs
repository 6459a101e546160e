//! Integration tests for config parsing and loading.

use nerd_icons_config::{
    ConfigError, IconEntry, MAX_CONFIG_SIZE, MAX_PATTERN_LENGTH, load, parse,
};
use std::fs;
use tempfile::TempDir;

fn title_pattern_config(pattern: &str) -> String {
    format!("icons:\n  nvim:\n    icon: N\n    title:\n      \"{pattern}\": G\n")
}

#[test]
fn test_malformed_entry_is_skipped() {
    let text = "icons:\n  this line has no colon\n  zsh: Z\n";
    let config = parse(text).expect("malformed lines must not fail the parse");
    assert_eq!(config.icons.len(), 1);
    assert_eq!(config.icons.get("zsh"), Some(&IconEntry::Scalar("Z".into())));
}

#[test]
fn test_parse_is_idempotent() {
    let text = fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/config.yml"
    ))
    .unwrap();
    let first = parse(&text).unwrap();
    let second = parse(&text).unwrap();
    assert_eq!(first, second);
    assert!(!first.icons.is_empty());
}

#[test]
fn test_pattern_at_limit_accepted() {
    let pattern = "a".repeat(MAX_PATTERN_LENGTH);
    let config = parse(&title_pattern_config(&pattern)).unwrap();
    let patterns = config.icons.get("nvim").unwrap().title_patterns().unwrap();
    assert!(patterns.contains_key(&pattern));
}

#[test]
fn test_pattern_over_limit_rejected_with_line() {
    let pattern = "a".repeat(MAX_PATTERN_LENGTH + 1);
    let err = parse(&title_pattern_config(&pattern)).unwrap_err();
    match &err {
        ConfigError::Parse { line, message } => {
            assert_eq!(*line, Some(5));
            assert!(message.contains("501"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(err.to_string().starts_with("Line 5:"));
}

#[test]
fn test_pattern_length_counts_characters() {
    // 500 multi-byte characters is within the limit even though it is > 500 bytes
    let pattern = "é".repeat(MAX_PATTERN_LENGTH);
    assert!(parse(&title_pattern_config(&pattern)).is_ok());
}

#[test]
fn test_load_at_size_ceiling() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yml");

    let header = "sessions:\n  work: W\n";
    let mut body = header.to_string();
    body.push_str(&"#".repeat(MAX_CONFIG_SIZE as usize - header.len()));
    assert_eq!(body.len() as u64, MAX_CONFIG_SIZE);
    fs::write(&path, &body).unwrap();

    let config = load(&path).expect("file at the ceiling must load");
    assert_eq!(config.sessions.get("work").map(String::as_str), Some("W"));
}

#[test]
fn test_load_over_size_ceiling() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yml");
    fs::write(&path, vec![b'#'; MAX_CONFIG_SIZE as usize + 1]).unwrap();

    match load(&path) {
        Err(ConfigError::TooLarge { size, max, .. }) => {
            assert_eq!(size, MAX_CONFIG_SIZE + 1);
            assert_eq!(max, MAX_CONFIG_SIZE);
        }
        other => panic!("expected TooLarge, got {other:?}"),
    }
}

#[test]
fn test_load_not_found() {
    let dir = TempDir::new().unwrap();
    let err = load(dir.path().join("missing.yml")).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
}

#[test]
fn test_load_invalid_utf8_is_lenient() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yml");
    let mut bytes = b"sessions:\n  work: W\n  bad: \xff\xfe\n".to_vec();
    bytes.extend_from_slice(b"  play: P\n");
    fs::write(&path, bytes).unwrap();

    let config = load(&path).unwrap();
    assert_eq!(config.sessions.get("work").map(String::as_str), Some("W"));
    assert_eq!(config.sessions.get("play").map(String::as_str), Some("P"));
}

#[test]
fn test_dump_preserves_order() {
    let config = parse("icons:\n  zsh: Z\n  bash: B\n  fish: F\n").unwrap();
    let json = serde_json::to_string(&config.icons).unwrap();
    assert_eq!(json, r#"{"zsh":"Z","bash":"B","fish":"F"}"#);
}

#[test]
fn test_dump_detailed_entry_shape() {
    let config =
        parse("hosts:\n  box:\n    icon: B\n    ring-color: '#111'\n    icon_color: '#222'\n")
            .unwrap();
    let json = serde_json::to_value(&config.hosts).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"box": {"icon": "B", "ring-color": "#111", "icon-color": "#222"}})
    );
}
