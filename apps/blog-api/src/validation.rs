//! Validation error mapping.
//!
//! Rule failures reported by `validator` are keyed as `<Field>.<rule>` and
//! looked up in a fixed message table. Body decoding failures get their own
//! entries.

use blog_shared::FieldError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::{Path, Segment};
use validator::{ValidationError, ValidationErrors};

use crate::middleware::error::AppError;

const IS_REQUIRED: &str = "is required";

static MESSAGES: &[(&str, &str)] = &[
    ("ID.required", IS_REQUIRED),
    ("ID.uuid", "must be a valid UUID"),
    ("Title.required", IS_REQUIRED),
    ("Title.min", "should at least have 5 characters"),
    ("Title.max", "should not exceed 60 characters"),
    ("Description.required", IS_REQUIRED),
    ("Description.min", "should at least have 10 characters"),
    ("Description.max", "should not exceed 300 characters"),
    ("Body.required", IS_REQUIRED),
    ("Body.min", "should at least have 10 characters"),
];

/// Struct field name to public name, in the order errors are reported.
static FIELDS: &[(&str, &str)] = &[
    ("id", "ID"),
    ("title", "Title"),
    ("description", "Description"),
    ("body", "Body"),
];

/// Message for a failing `(field, rule)` pair, or the generic fallback.
pub fn message_for(field: &str, rule: &str) -> String {
    let key = format!("{field}.{rule}");
    MESSAGES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, message)| message.to_string())
        .unwrap_or_else(|| format!("custom message is not available: {key}"))
}

/// Flatten `validator` output into one entry per failing field, ordered by
/// field declaration.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut failing: Vec<(usize, String, String)> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let field: &str = field.as_ref();
            let err = errs.first()?;
            let (position, public) = FIELDS
                .iter()
                .position(|(name, _)| *name == field)
                .map(|i| (i, FIELDS[i].1.to_string()))
                .unwrap_or((FIELDS.len(), field.to_string()));
            let message = message_for(&public, rule_of(err));
            Some((position, public, message))
        })
        .collect();

    // Unknown fields sort by name after the known ones.
    failing.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    failing
        .into_iter()
        .map(|(_, field, message)| FieldError::new(field, message))
        .collect()
}

/// Rule name of a `validator` error. Length failures are split into `min` and
/// `max` by comparing the rejected value against the bounds.
fn rule_of(err: &ValidationError) -> &str {
    if err.code != "length" {
        return err.code.as_ref();
    }

    let min = err.params.get("min").and_then(|v| v.as_u64());
    let has_max = err.params.contains_key("max");
    let chars = err
        .params
        .get("value")
        .and_then(|v| v.as_str())
        .map(|v| v.chars().count() as u64);

    match (chars, min) {
        (Some(n), Some(min)) if n < min => "min",
        (Some(_), _) if has_max => "max",
        (None, Some(_)) if !has_max => "min",
        (None, None) if has_max => "max",
        _ => "length",
    }
}

/// Decode a JSON request body, whatever its content type.
///
/// The body is parsed into a `Value` first so a type mismatch can be reported
/// against the JSON field that carries it.
pub fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| rejected(syntax_error(&e)))?;
    // Structs also deserialize from arrays; only objects are accepted.
    if !value.is_object() {
        return Err(rejected(not_an_object(&value)));
    }
    serde_path_to_error::deserialize(&value).map_err(|e| rejected(type_error(&value, e.path())))
}

fn rejected(field: FieldError) -> AppError {
    tracing::debug!(field = %field.field, reason = %field.reason, "Rejected request body");
    AppError::Validation(vec![field])
}

fn syntax_error(err: &serde_json::Error) -> FieldError {
    if err.is_eof() {
        FieldError::new("body", "request body cannot be empty")
    } else {
        FieldError::new("unknown", format!("unsupported custom error for: {err}"))
    }
}

fn not_an_object(value: &Value) -> FieldError {
    FieldError::new("body", format!("body cannot be a {}", kind_of(value)))
}

fn type_error(root: &Value, path: &Path) -> FieldError {
    if path.iter().next().is_none() {
        return not_an_object(root);
    }

    let kind = value_at(root, path).map_or("value", kind_of);
    let field = path.to_string();
    let reason = format!("{field} cannot be a {kind}");
    FieldError::new(field, reason)
}

fn value_at<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    path.iter().try_fold(root, |value, segment| match segment {
        Segment::Map { key } => value.get(key),
        Segment::Seq { index } => value.get(*index),
        _ => None,
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use blog_shared::dto::{BlogPostPath, CreateBlogPostRequest, UpdateBlogPostRequest};
    use validator::Validate;

    use super::*;

    #[test]
    fn message_table_lookup() {
        assert_eq!(message_for("ID", "uuid"), "must be a valid UUID");
        assert_eq!(message_for("Body", "required"), "is required");
        assert_eq!(
            message_for("Description", "max"),
            "should not exceed 300 characters"
        );
    }

    #[test]
    fn unknown_pair_uses_fallback() {
        assert_eq!(
            message_for("Body", "max"),
            "custom message is not available: Body.max"
        );
    }

    #[test]
    fn create_errors_are_ordered_by_field() {
        let req = CreateBlogPostRequest {
            title: Some("Cre".to_string()),
            description: None,
            body: Some("Created body".to_string()),
        };
        let errors = req.validate().unwrap_err();

        assert_eq!(
            field_errors(&errors),
            vec![
                FieldError::new("Title", "should at least have 5 characters"),
                FieldError::new("Description", "is required"),
            ]
        );
    }

    #[test]
    fn four_character_title_is_too_short() {
        let req = CreateBlogPostRequest {
            title: Some("Four".to_string()),
            description: Some("Created description".to_string()),
            body: Some("Created body".to_string()),
        };

        assert_eq!(
            field_errors(&req.validate().unwrap_err()),
            vec![FieldError::new("Title", "should at least have 5 characters")]
        );
    }

    #[test]
    fn max_length_violations() {
        let req = UpdateBlogPostRequest {
            title: Some("t".repeat(61)),
            description: Some("d".repeat(301)),
            body: Some("b".repeat(5_000)),
        };

        assert_eq!(
            field_errors(&req.validate().unwrap_err()),
            vec![
                FieldError::new("Title", "should not exceed 60 characters"),
                FieldError::new("Description", "should not exceed 300 characters"),
            ]
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let req = CreateBlogPostRequest {
            title: Some("t".repeat(60)),
            description: Some("d".repeat(10)),
            body: Some("b".repeat(10)),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn invalid_path_id() {
        let path = BlogPostPath {
            id: "invalidID".to_string(),
        };

        assert_eq!(
            field_errors(&path.validate().unwrap_err()),
            vec![FieldError::new("ID", "must be a valid UUID")]
        );
    }

    fn decode_create(body: &str) -> FieldError {
        let err = decode_body::<CreateBlogPostRequest>(body.as_bytes()).unwrap_err();
        match err {
            AppError::Validation(mut fields) => fields.remove(0),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_body_maps_to_dedicated_message() {
        assert_eq!(
            decode_create(""),
            FieldError::new("body", "request body cannot be empty")
        );
        assert_eq!(
            decode_create("  \n"),
            FieldError::new("body", "request body cannot be empty")
        );
    }

    #[test]
    fn wrong_type_is_keyed_by_json_field() {
        assert_eq!(
            decode_create(r#"{"title": 5}"#),
            FieldError::new("title", "title cannot be a number")
        );
        assert_eq!(
            decode_create(r#"{"title": "Some title", "body": ["a"]}"#),
            FieldError::new("body", "body cannot be a array")
        );
        assert_eq!(
            decode_create(r#"{"description": true}"#),
            FieldError::new("description", "description cannot be a bool")
        );
    }

    #[test]
    fn non_object_body_is_reported_on_body() {
        assert_eq!(
            decode_create(r#""just a string""#),
            FieldError::new("body", "body cannot be a string")
        );
        assert_eq!(
            decode_create(r#"["Some title", "Some description", "Some body"]"#),
            FieldError::new("body", "body cannot be a array")
        );
        assert_eq!(
            decode_create("null"),
            FieldError::new("body", "body cannot be a null")
        );
    }

    #[test]
    fn syntax_error_is_unknown() {
        let field = decode_create("{title");

        assert_eq!(field.field, "unknown");
        assert!(field.reason.starts_with("unsupported custom error for: "));
    }

    #[test]
    fn valid_body_decodes() {
        let req: UpdateBlogPostRequest = decode_body(br#"{"title": null}"#).unwrap();
        assert_eq!(req.title, None);
    }
}
