//! Tolerant extraction of a JSON object from free-form model output.

use serde_json::Value;
use styleloop_core::{Error, Result};

/// Extract and parse the JSON object embedded in a model reply.
///
/// The upstream model sometimes prepends explanatory prose or wraps the
/// payload in code fences despite instructions to return JSON only, so
/// this takes the slice between the first `{` and the last `}` and parses
/// that. Absent or reversed braces are [`Error::NoJson`]; a slice that
/// does not parse is [`Error::MalformedJson`].
pub fn extract_json_object(text: &str) -> Result<Value> {
    let start = text.find('{').ok_or(Error::NoJson)?;
    let end = text.rfind('}').ok_or(Error::NoJson)?;
    if end < start {
        return Err(Error::NoJson);
    }
    serde_json::from_str(&text[start..=end]).map_err(Error::MalformedJson)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_json() {
        let value = extract_json_object(r#"{"style_tags": ["classic"]}"#).unwrap();
        assert_eq!(value, json!({"style_tags": ["classic"]}));
    }

    #[test]
    fn test_surrounding_prose_ignored() {
        let bare = extract_json_object(r#"{"a": 1}"#).unwrap();
        let wrapped = extract_json_object(
            "Sure! Here is the analysis you asked for:\n{\"a\": 1}\nLet me know if you need more.",
        )
        .unwrap();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn test_code_fences_ignored() {
        let value = extract_json_object("```json\n{\"a\": 1}\n```").unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_nested_objects_kept_whole() {
        let value = extract_json_object(
            r#"prefix {"outer": {"inner": [1, 2]}} suffix"#,
        )
        .unwrap();
        assert_eq!(value["outer"]["inner"], json!([1, 2]));
    }

    #[test]
    fn test_no_braces_is_no_json() {
        assert!(matches!(
            extract_json_object("the model refused to answer"),
            Err(Error::NoJson)
        ));
    }

    #[test]
    fn test_reversed_braces_is_no_json() {
        assert!(matches!(extract_json_object("} nothing {"), Err(Error::NoJson)));
    }

    #[test]
    fn test_broken_slice_is_malformed() {
        assert!(matches!(
            extract_json_object(r#"{"a": unquoted}"#),
            Err(Error::MalformedJson(_))
        ));
    }
}
