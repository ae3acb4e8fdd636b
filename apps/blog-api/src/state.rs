//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::BlogPostRepository;

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use anyhow::Context;
#[cfg(feature = "postgres")]
use blog_infra::PostgresBlogPostRepository;
#[cfg(not(feature = "postgres"))]
use blog_infra::InMemoryBlogPostRepository;
#[cfg(feature = "postgres")]
use migration::{Migrator, MigratorTrait};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn BlogPostRepository>) -> Self {
        Self { posts }
    }

    /// Build the application state with the configured repository.
    #[cfg_attr(not(feature = "postgres"), allow(unused_variables))]
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        #[cfg(feature = "postgres")]
        let posts: Arc<dyn BlogPostRepository> = {
            let db = blog_infra::database::connect(&config.database)
                .await
                .context("Could not connect to database")?;

            if config.auto_migrate {
                Migrator::up(&db, None)
                    .await
                    .context("Failed to apply migrations")?;
                tracing::info!("Database migrations applied");
            }

            Arc::new(PostgresBlogPostRepository::new(db))
        };

        #[cfg(not(feature = "postgres"))]
        let posts: Arc<dyn BlogPostRepository> = {
            tracing::info!("Running without postgres feature - using in-memory repository");
            Arc::new(InMemoryBlogPostRepository::new())
        };

        tracing::info!("Application state initialized");

        Ok(Self::new(posts))
    }
}
