//! Helpers shared by the research tools.

use paperscope_rs_protocol::ToolError;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::LazyLock;

/// Pattern accepted for ArXiv ids (`YYMM.NNNNN`, optional version suffix).
pub(super) const ARXIV_ID_PATTERN: &str = r"^\d{4}\.\d{4,5}(v\d+)?$";

static ARXIV_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ARXIV_ID_PATTERN).expect("valid arxiv id pattern"));

/// Parse JSON args into a typed struct for tool calls.
pub(super) fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ToolError> {
    serde_json::from_value(args).map_err(|err| ToolError::InvalidArguments(err.to_string()))
}

/// Parse a derived `io_schema` string into JSON.
pub(super) fn parse_schema(raw: &str) -> Value {
    serde_json::from_str(raw).expect("Error parsing tool parameters")
}

/// Reject ArXiv ids that do not look like `YYMM.NNNNN`.
pub(super) fn validate_arxiv_id(arxiv_id: Option<&str>) -> Result<(), ToolError> {
    match arxiv_id {
        Some(id) if !ARXIV_ID.is_match(id) => Err(ToolError::InvalidArguments(format!(
            "arxiv_id `{id}` does not match YYMM.NNNNN"
        ))),
        _ => Ok(()),
    }
}

/// Reject argument keys the bound tool does not expose.
pub(super) fn reject_fields(args: &Value, hidden: &[&str]) -> Result<(), ToolError> {
    let Some(map) = args.as_object() else {
        return Ok(());
    };
    match hidden.iter().find(|field| map.contains_key(**field)) {
        Some(field) => Err(ToolError::InvalidArguments(format!(
            "unknown field `{field}`"
        ))),
        None => Ok(()),
    }
}

/// Shape a derived object schema: drop hidden properties, pin the required
/// list and apply per-property overrides.
pub(super) fn shape_schema(
    mut schema: Value,
    hidden: &[&str],
    required: &[&str],
    overrides: &[(&str, Value)],
) -> Value {
    if let Some(map) = schema.as_object_mut() {
        map.insert("type".to_string(), json!("object"));
        map.insert("required".to_string(), json!(required));
        let properties = map
            .entry("properties")
            .or_insert_with(|| json!({}));
        if let Some(properties) = properties.as_object_mut() {
            for field in hidden {
                properties.remove(*field);
            }
            for (field, patch) in overrides {
                let entry = properties
                    .entry(field.to_string())
                    .or_insert_with(|| json!({}));
                merge_object(entry, patch);
            }
        }
    }
    schema
}

fn merge_object(target: &mut Value, patch: &Value) {
    let (Some(target), Some(patch)) = (target.as_object_mut(), patch.as_object()) else {
        return;
    };
    for (key, value) in patch {
        target.insert(key.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::{reject_fields, shape_schema, validate_arxiv_id};
    use paperscope_rs_protocol::ToolError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn arxiv_ids_follow_yymm_pattern() {
        assert!(validate_arxiv_id(None).is_ok());
        assert!(validate_arxiv_id(Some("1706.03762")).is_ok());
        assert!(validate_arxiv_id(Some("2309.10691v2")).is_ok());
        assert!(validate_arxiv_id(Some("1501.0001")).is_ok());

        let err = validate_arxiv_id(Some("attention")).expect_err("invalid");
        let ToolError::InvalidArguments(message) = err else {
            panic!("expected invalid arguments");
        };
        assert_eq!(message, "arxiv_id `attention` does not match YYMM.NNNNN");
        assert!(validate_arxiv_id(Some("17060.3762")).is_err());
    }

    #[test]
    fn reject_fields_names_the_hidden_field() {
        let args = json!({ "title": "t", "show_figure": true });
        let err = reject_fields(&args, &["sections", "show_figure"]).expect_err("hidden");
        assert_eq!(err.to_string(), "invalid arguments: unknown field `show_figure`");
        assert!(reject_fields(&json!({ "title": "t" }), &["sections"]).is_ok());
    }

    #[test]
    fn shape_schema_prunes_and_patches() {
        let derived = json!({
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "sections": { "type": "array" },
                "rec_type": { "type": "object", "description": "kind" }
            },
            "required": ["title", "sections", "rec_type"]
        });
        let shaped = shape_schema(
            derived,
            &["sections"],
            &["title"],
            &[("rec_type", json!({ "type": "string", "enum": ["a", "b"] }))],
        );
        assert_eq!(
            shaped,
            json!({
                "type": "object",
                "properties": {
                    "title": { "type": "string" },
                    "rec_type": { "type": "string", "description": "kind", "enum": ["a", "b"] }
                },
                "required": ["title"]
            })
        );
    }
}
