//! Response envelopes returned by the blog post API.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public JSON shape of a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `{"blog": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogResponse {
    pub blog: BlogPostResponse,
}

/// `{"blogs": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogListResponse {
    pub blogs: Vec<BlogPostResponse>,
}

/// `{"message": "...", "ID": "..."}` returned after a create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    #[serde(rename = "ID")]
    pub id: Uuid,
}

/// `{"message": "..."}` for confirmations and non-validation errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"message": [{"Title": "..."}, ...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub message: Vec<FieldError>,
}

/// One failing field, serialized as a single-entry object `{field: reason}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<String, String>",
    try_from = "BTreeMap<String, String>"
)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<FieldError> for BTreeMap<String, String> {
    fn from(err: FieldError) -> Self {
        BTreeMap::from([(err.field, err.reason)])
    }
}

impl TryFrom<BTreeMap<String, String>> for FieldError {
    type Error = String;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        if map.len() != 1 {
            return Err(format!(
                "field error must have exactly one entry, got {}",
                map.len()
            ));
        }
        let (field, reason) = map
            .into_iter()
            .next()
            .ok_or_else(|| "field error is empty".to_string())?;
        Ok(Self { field, reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_is_a_single_entry_object() {
        let body = ValidationErrorResponse {
            message: vec![
                FieldError::new("Title", "should at least have 5 characters"),
                FieldError::new("Description", "is required"),
            ],
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "message": [
                    {"Title": "should at least have 5 characters"},
                    {"Description": "is required"}
                ]
            })
        );
    }

    #[test]
    fn created_response_uses_upper_case_id_key() {
        let id = Uuid::new_v4();
        let value = serde_json::to_value(CreatedResponse {
            message: "blog post create successfully".to_string(),
            id,
        })
        .unwrap();

        assert_eq!(value["ID"], serde_json::json!(id));
    }

    #[test]
    fn field_error_rejects_multi_entry_objects() {
        let parsed: Result<FieldError, _> = serde_json::from_str(r#"{"a":"x","b":"y"}"#);
        assert!(parsed.is_err());
    }
}
