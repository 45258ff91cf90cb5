use std::fs;

use serde::{Deserialize, Serialize};
use structfile::Error;
use tempfile::tempdir;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Group {
    group_name: String,
    #[serde(default)]
    members: Vec<Person>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Person {
    name: String,
    age: i32,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Empty {}

fn sample_group() -> Group {
    Group {
        group_name: "TheGophers".to_owned(),
        members: vec![
            Person {
                name: "Alice".to_owned(),
                age: 19,
            },
            Person {
                name: "Bob".to_owned(),
                age: 52,
            },
        ],
    }
}

#[test]
fn write_requires_a_filename() {
    let err = structfile::write("", Some("json"), &Empty::default()).unwrap_err();
    assert!(matches!(err, Error::FilenameUndefined));
}

#[test]
fn write_resolves_the_target_filename() {
    let dir = tempdir().unwrap();

    let cases = [
        ("data", Some("json"), "data.json"),
        ("data.json", Some("json"), "data.json"),
        ("data.json", None, "data.json"),
        ("data.config", Some("json"), "data.config.json"),
        ("data", Some("JSON"), "data.json"),
        ("data.json", Some("JsON"), "data.json"),
    ];

    for (filename, hint, expected) in cases {
        let path = dir.path().join(filename);
        structfile::write(&path, hint, &Empty::default()).unwrap();

        let expected = dir.path().join(expected);
        assert!(
            expected.exists(),
            "{filename} with hint {hint:?} should land at {expected:?}"
        );
        fs::remove_file(&expected).unwrap();
    }
}

#[test]
fn write_produces_exact_json_bytes() {
    let dir = tempdir().unwrap();

    // An extensionless destination picks up the hint's extension, and an
    // empty-fields value encodes to exactly `{}`.
    structfile::write(dir.path().join("data"), Some("json"), &Empty::default()).unwrap();
    assert_eq!(fs::read(dir.path().join("data.json")).unwrap(), b"{}");

    let path = dir.path().join("data.json");
    structfile::write(&path, Some("json"), &sample_group()).unwrap();
    assert_eq!(
        fs::read(&path).unwrap(),
        br#"{"GroupName":"TheGophers","Members":[{"Name":"Alice","Age":19},{"Name":"Bob","Age":52}]}"#
    );
}

#[test]
fn write_truncates_an_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");

    structfile::write(&path, None, &sample_group()).unwrap();
    structfile::write(&path, None, &Empty::default()).unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"{}");
}

#[test]
fn mismatched_hint_keeps_the_original_suffix_and_wins() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.yaml");

    structfile::write(&path, Some("json"), &sample_group()).unwrap();

    let resolved = dir.path().join("data.yaml.json");
    assert!(resolved.exists());
    assert!(fs::read(&resolved).unwrap().starts_with(b"{"));
    assert!(!path.exists());
}

#[test]
fn write_rejects_unresolvable_and_unsupported_formats() {
    let dir = tempdir().unwrap();

    let bare = dir.path().join("data");
    let err = structfile::write(&bare, None, &Empty::default()).unwrap_err();
    assert!(matches!(err, Error::FormatUnresolved));
    assert!(!bare.exists());

    let json = dir.path().join("data.json");
    let err = structfile::write(&json, Some("invalidformat"), &Empty::default()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(token) if token == "invalidformat"));
    assert!(!json.exists());

    let config = dir.path().join("data.config");
    let err = structfile::write(&config, None, &Empty::default()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(token) if token == "config"));
    assert!(!config.exists());
}

#[test]
fn write_surfaces_io_errors_unchanged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("data.json");

    let err = structfile::write(&path, None, &sample_group()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn hint_decides_the_codec_for_every_format() {
    let dir = tempdir().unwrap();

    for (hint, expected, prefix) in [
        ("json", "data.json", &b"{"[..]),
        ("xml", "data.xml", &b"<Group"[..]),
        ("yaml", "data.yaml", &b"GroupName"[..]),
    ] {
        let path = dir.path().join("data");
        structfile::write(&path, Some(hint), &sample_group()).unwrap();

        let written = fs::read(dir.path().join(expected)).unwrap();
        assert!(
            written.starts_with(prefix),
            "{hint} output should start with {:?}",
            String::from_utf8_lossy(prefix)
        );
    }
}
