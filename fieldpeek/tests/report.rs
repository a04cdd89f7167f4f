//! End-to-end checks of the report we print for various exports.

use fieldpeek_common::inspector::inspect_reader;
use pretty_assertions::assert_eq;

/// Run an inspection over `input` and return everything it printed.
fn report(input: &str) -> String {
    let mut out = vec![];
    inspect_reader(input.as_bytes(), &mut out).expect("inspection failed");
    String::from_utf8(out).expect("report was not UTF-8")
}

#[test]
fn no_projects() {
    assert_eq!(report(r#"{"projects": []}"#), "");
}

#[test]
fn project_with_empty_scenes() {
    let input = r#"{"projects": [{"name": "A", "id": 1, "scenes": []}]}"#;
    assert_eq!(
        report(input),
        "\
Available project fields:
  - id: int
  - name: str
",
    );
}

#[test]
fn project_with_scene() {
    let input = r#"{"projects": [{"id": 1, "scenes": [{"duration": 5.0, "title": "Intro"}]}]}"#;
    assert_eq!(
        report(input),
        "\
Available project fields:
  - id: int

Available scene fields:
  - duration: float
  - title: str
",
    );
}

#[test]
fn every_kind_label() {
    let input = r#"{"projects": [{
        "tags": ["a"],
        "owner": {"name": "B"},
        "draft": true,
        "cover": null,
        "ratio": 1.5,
        "title": "T",
        "count": 3
    }]}"#;
    assert_eq!(
        report(input),
        "\
Available project fields:
  - count: int
  - cover: NoneType
  - draft: bool
  - owner: dict
  - ratio: float
  - tags: list
  - title: str
",
    );
}

#[test]
fn listings_ignore_key_order() {
    let forward = r#"{"projects": [{"a": 1, "b": 2, "c": 3, "scenes": [{"x": 1, "y": 2}]}]}"#;
    let backward = r#"{"projects": [{"scenes": [{"y": 2, "x": 1}], "c": 3, "b": 2, "a": 1}]}"#;
    assert_eq!(report(forward), report(backward));
}

#[test]
fn only_first_entries_matter() {
    let one = r#"{"projects": [{"id": 1, "scenes": [{"title": "Intro"}]}]}"#;
    let many = r#"{"projects": [
        {"id": 1, "scenes": [{"title": "Intro"}, {"extra": [], "more": 1}]},
        {"other": "x", "scenes": [{"unused": true}]}
    ]}"#;
    assert_eq!(report(one), report(many));
}

#[test]
fn truncated_json_fails_without_output() {
    let mut out = vec![];
    let result = inspect_reader(r#"{"projects": [{"#.as_bytes(), &mut out);
    assert!(result.is_err());
    assert!(out.is_empty());
}

#[test]
fn invalid_utf8_fails() {
    let mut out = vec![];
    let result = inspect_reader(&b"{\"projects\": \xff}"[..], &mut out);
    let err = result.expect_err("invalid UTF-8 should fail");
    assert!(format!("{:#}", err).contains("can't read input"));
    assert!(out.is_empty());
}

#[test]
fn number_labels_follow_the_literal() {
    let input = r#"{"projects": [{
        "big": 18446744073709551616,
        "huge": 1e400,
        "neg_zero": -0,
        "scaled": 2E3
    }]}"#;
    assert_eq!(
        report(input),
        "\
Available project fields:
  - big: int
  - huge: float
  - neg_zero: int
  - scaled: float
",
    );
}
