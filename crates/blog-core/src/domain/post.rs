use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Blog post entity.
///
/// `id`, `created_at` and `updated_at` are assigned by the storage layer and
/// never taken from a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields of a post about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: String,
    pub description: String,
    pub body: String,
}

impl NewBlogPost {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            body: body.into(),
        }
    }

    /// Turn the input into a full entity with a fresh id and both timestamps
    /// set to `now`.
    pub fn into_post(self, now: DateTime<Utc>) -> BlogPost {
        BlogPost {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            body: self.body,
            created_at: now,
            updated_at: now,
        }
    }
}

impl BlogPost {
    /// Overwrite the fields present in a partial update; absent fields keep
    /// their stored value.
    pub fn merge(
        &mut self,
        title: Option<String>,
        description: Option<String>,
        body: Option<String>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(body) = body {
            self.body = body;
        }
    }
}
