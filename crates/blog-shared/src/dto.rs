//! Data Transfer Objects - request types for the API.
//!
//! Length limits are counted in characters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Request to create a blog post. Every field is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateBlogPostRequest {
    #[validate(required, length(min = 5, max = 60))]
    pub title: Option<String>,
    #[validate(required, length(min = 10, max = 300))]
    pub description: Option<String>,
    #[validate(required, length(min = 10))]
    pub body: Option<String>,
}

/// Partial update of a blog post. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateBlogPostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 5, max = 60))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 10, max = 300))]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 10))]
    pub body: Option<String>,
}

/// `{ID}` segment of `/blog-post/{ID}`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BlogPostPath {
    #[serde(rename = "ID")]
    #[validate(custom(function = "validate_uuid"))]
    pub id: String,
}

impl BlogPostPath {
    /// The parsed id. Only meaningful after `validate()` succeeded.
    pub fn uuid(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.id).ok()
    }
}

fn validate_uuid(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("required"));
    }
    Uuid::parse_str(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("uuid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_with_valid_fields_passes() {
        let req: CreateBlogPostRequest = serde_json::from_str(
            r#"{"title":"Created Title","description":"Created description","body":"Created body"}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn create_request_reports_missing_and_short_fields() {
        let req: CreateBlogPostRequest =
            serde_json::from_str(r#"{"title":"Cre","body":"Created body"}"#).unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields["title"][0].code, "length");
        assert_eq!(fields["description"][0].code, "required");
        assert!(!fields.contains_key("body"));
    }

    #[test]
    fn update_request_ignores_absent_fields() {
        let req: UpdateBlogPostRequest =
            serde_json::from_str(r#"{"title":"New Title Val"}"#).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.description.is_none());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let req = UpdateBlogPostRequest {
            title: Some("é".repeat(31)),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn path_rejects_malformed_uuid() {
        let path = BlogPostPath {
            id: "invalid-id".to_string(),
        };
        let errors = path.validate().unwrap_err();
        assert_eq!(errors.field_errors()["id"][0].code, "uuid");

        let path = BlogPostPath {
            id: Uuid::new_v4().to_string(),
        };
        assert!(path.validate().is_ok());
        assert!(path.uuid().is_some());
    }
}
