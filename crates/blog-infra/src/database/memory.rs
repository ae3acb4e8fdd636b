//! In-memory repository - used when the `postgres` feature is disabled.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

#[derive(Default)]
struct Store {
    posts: HashMap<Uuid, (u64, BlogPost)>,
    next_seq: u64,
}

/// In-memory blog post repository using a HashMap behind an async RwLock.
///
/// Insertion order breaks ties between posts created within the same clock
/// tick. Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryBlogPostRepository {
    store: RwLock<Store>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn create(&self, post: NewBlogPost) -> Result<Uuid, RepoError> {
        let post = post.into_post(Utc::now());
        let id = post.id;

        let mut store = self.store.write().await;
        let seq = store.next_seq;
        store.next_seq += 1;
        store.posts.insert(id, (seq, post));

        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<BlogPost, RepoError> {
        let store = self.store.read().await;
        store
            .posts
            .get(&id)
            .map(|(_, post)| post.clone())
            .ok_or(RepoError::NotFound)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let store = self.store.read().await;
        let mut entries: Vec<_> = store.posts.values().collect();
        entries.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at.cmp(&a.created_at).then(seq_b.cmp(seq_a))
        });

        Ok(entries.into_iter().map(|(_, post)| post.clone()).collect())
    }

    async fn update(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        let (_, stored) = store.posts.get_mut(&post.id).ok_or(RepoError::NotFound)?;

        stored.title = post.title;
        stored.description = post.description;
        stored.body = post.body;
        stored.updated_at = Utc::now().max(stored.created_at);

        Ok(stored.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(title: &str) -> NewBlogPost {
        NewBlogPost::new(title, "Some description for the blog", "Some body for the blog")
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryBlogPostRepository::new();
        let id = repo.create(new_post("First post")).await.unwrap();

        let post = repo.find_by_id(id).await.unwrap();
        assert_eq!(post.id, id);
        assert_eq!(post.title, "First post");
        assert_eq!(post.created_at, post.updated_at);
    }

    #[tokio::test]
    async fn test_find_all_newest_first() {
        let repo = InMemoryBlogPostRepository::new();
        let first = repo.create(new_post("First post")).await.unwrap();
        let second = repo.create(new_post("Second post")).await.unwrap();
        let third = repo.create(new_post("Third post")).await.unwrap();

        let ids: Vec<Uuid> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![third, second, first]);
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let repo = InMemoryBlogPostRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_refreshes_updated_at_only() {
        let repo = InMemoryBlogPostRepository::new();
        let id = repo.create(new_post("First post")).await.unwrap();
        let mut post = repo.find_by_id(id).await.unwrap();
        post.title = "Renamed post".to_string();
        post.created_at = Utc::now() + chrono::Duration::days(1);

        let updated = repo.update(post).await.unwrap();
        let stored = repo.find_by_id(id).await.unwrap();

        assert_eq!(updated.title, "Renamed post");
        assert_eq!(stored.title, "Renamed post");
        assert!(updated.updated_at >= updated.created_at);
        assert!(updated.created_at < Utc::now() + chrono::Duration::hours(1));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryBlogPostRepository::new();
        let post = new_post("Ghost post").into_post(Utc::now());

        assert!(matches!(repo.update(post).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = InMemoryBlogPostRepository::new();
        let id = repo.create(new_post("First post")).await.unwrap();

        repo.delete(id).await.unwrap();
        assert!(matches!(repo.delete(id).await, Err(RepoError::NotFound)));
        assert!(matches!(repo.find_by_id(id).await, Err(RepoError::NotFound)));
    }
}
