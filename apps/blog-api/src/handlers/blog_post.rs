//! Blog post handlers. Each one performs a single repository call, except
//! update which reads the current post before writing the merged one.

use actix_web::{HttpResponse, web};
use uuid::Uuid;
use validator::Validate;

use blog_core::domain::{BlogPost, NewBlogPost};
use blog_shared::dto::{BlogPostPath, CreateBlogPostRequest, UpdateBlogPostRequest};
use blog_shared::{
    BlogListResponse, BlogPostResponse, BlogResponse, CreatedResponse, FieldError,
    MessageResponse,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::validation;

/// POST /blog-post
pub async fn create_blog_post(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let req: CreateBlogPostRequest = validation::decode_body(&body)?;
    req.validate()?;

    let post = NewBlogPost::new(
        required(req.title, "Title")?,
        required(req.description, "Description")?,
        required(req.body, "Body")?,
    );
    let id = state.posts.create(post).await?;

    tracing::info!(post_id = %id, "Blog post created");

    Ok(HttpResponse::Created().json(CreatedResponse {
        message: "blog post create successfully".to_string(),
        id,
    }))
}

/// GET /blog-post
pub async fn get_blog_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;

    Ok(HttpResponse::Ok().json(BlogListResponse {
        blogs: posts.into_iter().map(to_response).collect(),
    }))
}

/// GET /blog-post/{ID}
pub async fn get_blog_post(
    state: web::Data<AppState>,
    path: web::Path<BlogPostPath>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state.posts.find_by_id(id).await?;

    Ok(HttpResponse::Ok().json(BlogResponse {
        blog: to_response(post),
    }))
}

/// PATCH /blog-post/{ID}
///
/// Only fields present in the body overwrite the stored post. The body is
/// decoded after the read, so a missing post is a 404 whatever the body holds.
pub async fn update_blog_post(
    state: web::Data<AppState>,
    path: web::Path<BlogPostPath>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let mut post = state.posts.find_by_id(id).await?;

    let req: UpdateBlogPostRequest = validation::decode_body(&body)?;
    req.validate()?;

    post.merge(req.title, req.description, req.body);
    let post = state.posts.update(post).await?;

    tracing::info!(post_id = %id, "Blog post updated");

    Ok(HttpResponse::Ok().json(BlogResponse {
        blog: to_response(post),
    }))
}

/// DELETE /blog-post/{ID}
pub async fn delete_blog_post(
    state: web::Data<AppState>,
    path: web::Path<BlogPostPath>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.posts.delete(id).await?;

    tracing::info!(post_id = %id, "Blog post deleted");

    Ok(HttpResponse::Ok().json(MessageResponse::new("blog post deleted successfully")))
}

fn parse_id(path: &BlogPostPath) -> AppResult<Uuid> {
    path.validate()?;
    path.uuid().ok_or_else(|| invalid("ID", "uuid"))
}

fn required(value: Option<String>, field: &str) -> AppResult<String> {
    value.ok_or_else(|| invalid(field, "required"))
}

fn invalid(field: &str, rule: &str) -> AppError {
    AppError::Validation(vec![FieldError::new(
        field,
        validation::message_for(field, rule),
    )])
}

fn to_response(post: BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id,
        title: post.title,
        description: post.description,
        body: post.body,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}
