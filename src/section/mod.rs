//! Section data: types, loading, and click correlation.
//!
//! This module handles:
//! - Deserializing sections from local files and remote bodies
//! - Resolving the correlation id of a section
//! - Finding the section a click event refers to

mod types;

pub use types::{
    FloatSide, ImageStyle, Section, SectionStyle, TextAlign, TextStyle, TitleStyle,
};

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors from reading a local sections file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid sections JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SectionsDocument {
    List(Vec<Section>),
    Wrapped { sections: Vec<Section> },
}

/// Parse a local sections document.
///
/// Accepts either a bare array of sections or an object with a
/// `sections` array.
///
/// # Errors
/// Returns the JSON error when the input matches neither shape.
pub fn parse_sections(json: &str) -> Result<Vec<Section>, serde_json::Error> {
    Ok(match serde_json::from_str(json)? {
        SectionsDocument::List(sections) | SectionsDocument::Wrapped { sections } => sections,
    })
}

/// Parse a remote response body shaped `{ "sections": [...] }`.
///
/// A body without a `sections` array (missing, null, or another type) yields
/// an empty list. Only malformed JSON or an array holding invalid sections
/// is an error.
///
/// # Errors
/// Returns the JSON error for unparseable bodies.
pub fn parse_remote_body(body: &str) -> Result<Vec<Section>, serde_json::Error> {
    let mut value: serde_json::Value = serde_json::from_str(body)?;
    match value.get_mut("sections").map(serde_json::Value::take) {
        Some(list @ serde_json::Value::Array(_)) => serde_json::from_value(list),
        _ => Ok(Vec::new()),
    }
}

/// Read and parse a sections file.
///
/// # Errors
/// Returns [`LoadError`] when the file cannot be read or parsed.
pub fn load_sections(path: &Path) -> Result<Vec<Section>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_sections(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Find the section a click with `id` refers to.
///
/// Explicit ids are matched first, so a section that carries its own id is
/// never reachable through its position. Sections without an explicit id
/// match on their zero-based index.
pub fn find_by_correlation_id<'a>(sections: &'a [Section], id: &str) -> Option<&'a Section> {
    sections
        .iter()
        .find(|s| s.explicit_id() == Some(id))
        .or_else(|| {
            let index: usize = id.parse().ok().filter(|i: &usize| i.to_string() == id)?;
            sections
                .get(index)
                .filter(|s| s.explicit_id().is_none())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_sections() -> Vec<Section> {
        vec![
            Section::new("a.png", "first"),
            Section::new("b.png", "second").with_id("x"),
            Section::new("c.png", "third"),
        ]
    }

    #[test]
    fn test_parse_full_section() {
        let json = r##"[{
            "id": "intro",
            "title": "Hello",
            "image": "https://example.com/a.png",
            "text": "Body",
            "isCircle": true,
            "floatSide": "right",
            "sectionStyle": {"padding": 8, "background": "#eee"},
            "titleStyle": {"fontSize": 24, "textAlign": "center", "fontWeight": 600},
            "imageStyle": {"width": 120, "height": 120},
            "textStyle": {"color": "red", "fontFamily": "Georgia"}
        }]"##;
        let sections = parse_sections(json).unwrap();
        assert_eq!(sections.len(), 1);
        let s = &sections[0];
        assert_eq!(s.id.as_deref(), Some("intro"));
        assert!(s.is_circle);
        assert_eq!(s.float_side, Some(FloatSide::Right));
        assert_eq!(s.section_style.padding, Some(8.0));
        assert_eq!(s.title_style.text_align, Some(TextAlign::Center));
        assert_eq!(s.title_style.font_weight.as_deref(), Some("600"));
        assert_eq!(s.image_style.width, Some(120.0));
        assert_eq!(s.text_style.font_family.as_deref(), Some("Georgia"));
    }

    #[test]
    fn test_parse_wrapped_document() {
        let json = r#"{"sections":[{"image":"a.png","text":"t"}]}"#;
        let sections = parse_sections(json).unwrap();
        assert_eq!(sections, vec![Section::new("a.png", "t")]);
    }

    #[test]
    fn test_parse_numeric_id() {
        let json = r#"[{"id": 7, "image":"a.png","text":"t"}]"#;
        let sections = parse_sections(json).unwrap();
        assert_eq!(sections[0].id.as_deref(), Some("7"));
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let json = r#"[{"image":"a.png","text":"t","extra":1,"textStyle":{"shadow":"x"}}]"#;
        assert!(parse_sections(json).is_ok());
    }

    #[test]
    fn test_parse_missing_image_is_error() {
        assert!(parse_sections(r#"[{"text":"t"}]"#).is_err());
    }

    #[test]
    fn test_remote_body_without_sections_is_empty() {
        assert!(parse_remote_body(r#"{"items":[]}"#).unwrap().is_empty());
        assert!(parse_remote_body(r#"{"sections":null}"#).unwrap().is_empty());
        assert!(parse_remote_body(r#"{"sections":"nope"}"#).unwrap().is_empty());
        assert!(parse_remote_body("[]").unwrap().is_empty());
    }

    #[test]
    fn test_remote_body_with_sections() {
        let body = r#"{"sections":[{"image":"a.png","text":"t","title":"T"}]}"#;
        let sections = parse_remote_body(body).unwrap();
        assert_eq!(sections[0].visible_title(), Some("T"));
    }

    #[test]
    fn test_remote_body_malformed_json_is_error() {
        assert!(parse_remote_body("{not json").is_err());
    }

    #[test]
    fn test_correlation_id_falls_back_to_index() {
        let sections = three_sections();
        assert_eq!(sections[0].correlation_id(0), "0");
        assert_eq!(sections[1].correlation_id(1), "x");
        assert_eq!(Section::new("a", "b").with_id("").correlation_id(4), "4");
    }

    #[test]
    fn test_find_positional_match() {
        let sections = three_sections();
        let found = find_by_correlation_id(&sections, "2").unwrap();
        assert_eq!(found.text, "third");
    }

    #[test]
    fn test_find_explicit_match() {
        let sections = three_sections();
        let found = find_by_correlation_id(&sections, "x").unwrap();
        assert_eq!(found.text, "second");
    }

    #[test]
    fn test_find_skips_position_of_explicitly_identified_section() {
        let sections = three_sections();
        assert!(find_by_correlation_id(&sections, "1").is_none());
    }

    #[test]
    fn test_find_explicit_id_beats_position() {
        let sections = vec![
            Section::new("a.png", "first").with_id("2"),
            Section::new("b.png", "second"),
            Section::new("c.png", "third"),
        ];
        let found = find_by_correlation_id(&sections, "2").unwrap();
        assert_eq!(found.text, "first");
    }

    #[test]
    fn test_find_miss() {
        let sections = three_sections();
        assert!(find_by_correlation_id(&sections, "nope").is_none());
        assert!(find_by_correlation_id(&sections, "9").is_none());
        assert!(find_by_correlation_id(&sections, "02").is_none());
        assert!(find_by_correlation_id(&[], "0").is_none());
    }

    #[test]
    fn test_load_sections_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sections.json");
        std::fs::write(&path, "{oops").unwrap();
        let err = load_sections(&path).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
        assert!(err.to_string().contains("sections.json"));

        let missing = load_sections(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, LoadError::Io { .. }));
    }
}
