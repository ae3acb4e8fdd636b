//! PostgreSQL repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use sea_orm::{ColumnTrait, DbConn, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use blog_core::domain::{BlogPost, NewBlogPost};
use blog_core::error::{RepoError, RepoOperation};
use blog_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};

/// PostgreSQL blog post repository. Each method issues exactly one statement.
pub struct PostgresBlogPostRepository {
    db: DbConn,
}

impl PostgresBlogPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Current time at the precision `timestamptz` stores.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn create(&self, post: NewBlogPost) -> Result<Uuid, RepoError> {
        let post = post.into_post(now());
        let id = post.id;

        let active_model: blog_post::ActiveModel = post.into();
        BlogPostEntity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| RepoError::failed(RepoOperation::Create, e))?;

        tracing::debug!(post_id = %id, "Blog post created");
        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<BlogPost, RepoError> {
        tracing::debug!(post_id = %id, "Finding blog post by id");

        BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::failed(RepoOperation::Get, e))?
            .map(Into::into)
            .ok_or(RepoError::NotFound)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let models = BlogPostEntity::find()
            .order_by_desc(blog_post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::failed(RepoOperation::List, e))?;

        tracing::debug!(count = models.len(), "Listed blog posts");
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let updated_at = now().max(post.created_at);

        let changes = blog_post::ActiveModel {
            id: NotSet,
            title: Set(post.title.clone()),
            description: Set(post.description.clone()),
            body: Set(post.body.clone()),
            created_at: NotSet,
            updated_at: Set(updated_at.into()),
        };

        let result = BlogPostEntity::update_many()
            .set(changes)
            .filter(blog_post::Column::Id.eq(post.id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::failed(RepoOperation::Update, e))?;

        // The row can vanish between the handler's read and this write.
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = %post.id, "Blog post updated");
        Ok(BlogPost { updated_at, ..post })
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = BlogPostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::failed(RepoOperation::Delete, e))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = %id, "Blog post deleted");
        Ok(())
    }
}
