use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, NewBlogPost};
use crate::error::RepoError;

/// Blog post repository. Every method is a single statement against storage.
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// Insert a post, assigning its id and timestamps. Returns the new id.
    async fn create(&self, post: NewBlogPost) -> Result<Uuid, RepoError>;

    /// Fetch one post, `RepoError::NotFound` if it does not exist.
    async fn find_by_id(&self, id: Uuid) -> Result<BlogPost, RepoError>;

    /// All posts, most recently created first.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Persist title, description and body of `post` and refresh `updated_at`.
    /// Returns the stored entity.
    async fn update(&self, post: BlogPost) -> Result<BlogPost, RepoError>;

    /// Hard delete, `RepoError::NotFound` when no row was removed.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}
