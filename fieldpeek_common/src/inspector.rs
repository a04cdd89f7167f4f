//! Inspect the shape of a `"projects"` export.
//!
//! We look at exactly two objects: the first project in the top-level
//! `"projects"` array, and the first scene in that project's `"scenes"`
//! array. Anything that doesn't have the expected shape is skipped rather
//! than reported as an error.

use std::io::BufWriter;

use crate::{kind::is_truthy, prelude::*};

/// The field of a project which holds its scenes. We never list this as a
/// project field.
const SCENES_FIELD: &str = "scenes";

/// The name and kind of a single field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldListing {
    /// The field's name.
    pub name: String,
    /// The kind of the field's value.
    pub kind: ValueKind,
}

impl FieldListing {
    /// List the fields of `entry`, sorted by name, skipping `exclude`.
    fn all_for(entry: &Map<String, Value>, exclude: Option<&str>) -> Vec<Self> {
        let mut listings = entry
            .iter()
            .filter(|(name, _)| Some(name.as_str()) != exclude)
            .map(|(name, value)| FieldListing {
                name: name.to_owned(),
                kind: ValueKind::of(value),
            })
            .collect::<Vec<_>>();
        listings.sort_by(|a, b| a.name.cmp(&b.name));
        listings
    }
}

impl fmt::Display for FieldListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  - {}: {}", self.name, self.kind)
    }
}

/// What we found in a document.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Inspection {
    /// Fields of the first project, if there is one.
    pub project: Option<Vec<FieldListing>>,
    /// Fields of the first scene of the first project, if there is one.
    pub scene: Option<Vec<FieldListing>>,
}

impl Inspection {
    /// Inspect a parsed document.
    #[instrument(skip_all, level = "trace")]
    pub fn from_document(doc: &Value) -> Self {
        let project = match first_project(doc) {
            Some(project) => project,
            None => return Inspection::default(),
        };
        let scene = first_scene(project);
        Inspection {
            project: Some(FieldListing::all_for(project, Some(SCENES_FIELD))),
            scene: scene.map(|scene| FieldListing::all_for(scene, None)),
        }
    }

    /// Is there anything to print?
    pub fn is_empty(&self) -> bool {
        self.project.is_none()
    }

    /// Write a human-readable report to `out`.
    pub fn write_report<W: Write>(&self, mut out: W) -> Result<()> {
        let project = match &self.project {
            Some(project) => project,
            None => return Ok(()),
        };
        writeln!(out, "Available project fields:")?;
        for listing in project {
            writeln!(out, "{}", listing)?;
        }
        if let Some(scene) = &self.scene {
            writeln!(out)?;
            writeln!(out, "Available scene fields:")?;
            for listing in scene {
                writeln!(out, "{}", listing)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Parse `text` as a JSON document.
#[instrument(skip_all, fields(len = text.len()), level = "trace")]
pub fn parse_document(text: &str) -> Result<Value> {
    serde_json::from_str(text).context("can't parse JSON input")
}

/// Read a document from `input`, and write a report on its shape to `out`.
///
/// The whole document is parsed before we write anything, so invalid input
/// never produces partial output.
#[instrument(skip_all, level = "debug")]
pub fn inspect_reader<R, W>(mut input: R, out: W) -> Result<()>
where
    R: Read,
    W: Write,
{
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("can't read input")?;
    let doc = parse_document(&text)?;
    let inspection = Inspection::from_document(&doc);
    if inspection.is_empty() {
        debug!("no project to inspect");
    }
    inspection
        .write_report(BufWriter::new(out))
        .context("can't write report")
}

/// Find the first project in `doc`, if it has the shape we expect.
fn first_project(doc: &Value) -> Option<&Map<String, Value>> {
    let projects = doc.get("projects")?;
    if !is_truthy(projects) {
        trace!("no projects");
        return None;
    }
    let project = first_object(projects);
    if project.is_none() {
        debug!("\"projects\" is not a list of objects, skipping");
    }
    project
}

/// Find the first scene in `project`, if it has the shape we expect.
fn first_scene(project: &Map<String, Value>) -> Option<&Map<String, Value>> {
    let scenes = project.get(SCENES_FIELD)?;
    if !is_truthy(scenes) {
        trace!("no scenes");
        return None;
    }
    let scene = first_object(scenes);
    if scene.is_none() {
        debug!("\"scenes\" is not a list of objects, skipping");
    }
    scene
}

/// If `value` is an array whose first element is an object, return that
/// object.
fn first_object(value: &Value) -> Option<&Map<String, Value>> {
    value.as_array()?.first()?.as_object()
}

#[cfg(test)]
fn report_for(input: &str) -> String {
    let mut out = vec![];
    inspect_reader(input.as_bytes(), &mut out).expect("inspection failed");
    String::from_utf8(out).expect("report was not UTF-8")
}

#[test]
fn empty_projects_print_nothing() {
    assert_eq!(report_for(r#"{"projects": []}"#), "");
    assert_eq!(report_for(r#"{"projects": null}"#), "");
    assert_eq!(report_for(r#"{"other": 1}"#), "");
    assert_eq!(report_for("[1, 2, 3]"), "");
}

#[test]
fn wrong_shapes_are_skipped() {
    assert_eq!(report_for(r#"{"projects": "abc"}"#), "");
    assert_eq!(report_for(r#"{"projects": {"a": 1}}"#), "");
    assert_eq!(report_for(r#"{"projects": [1, {"a": 1}]}"#), "");
    assert_eq!(
        report_for(r#"{"projects": [{"a": 1, "scenes": "lots"}]}"#),
        "Available project fields:\n  - a: int\n",
    );
    assert_eq!(
        report_for(r#"{"projects": [{"a": 1, "scenes": [[1]]}]}"#),
        "Available project fields:\n  - a: int\n",
    );
}

#[test]
fn project_without_fields_prints_header() {
    assert_eq!(
        report_for(r#"{"projects": [{}]}"#),
        "Available project fields:\n",
    );
}

#[test]
fn scenes_excluded_from_project_only() {
    let inspection = Inspection::from_document(&serde_json::json!({
        "projects": [{
            "id": 1,
            "scenes": [{ "scenes": [], "title": "Intro" }],
        }],
    }));
    let names = |listings: &Option<Vec<FieldListing>>| {
        listings
            .as_ref()
            .expect("missing listing")
            .iter()
            .map(|l| l.name.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&inspection.project), vec!["id"]);
    assert_eq!(names(&inspection.scene), vec!["scenes", "title"]);
}

#[test]
fn malformed_json_is_an_error() {
    let mut out = vec![];
    let err = inspect_reader(r#"{"projects": [{"id": 1"#.as_bytes(), &mut out)
        .expect_err("truncated JSON should fail");
    assert!(format!("{:#}", err).contains("can't parse JSON input"));
    assert!(out.is_empty());
}
