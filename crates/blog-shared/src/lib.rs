//! # Blog Shared
//!
//! Wire types of the blog post API: request DTOs carrying their validation
//! rules, and the JSON envelopes returned by every endpoint.

pub mod dto;
pub mod response;

pub use response::{
    BlogListResponse, BlogPostResponse, BlogResponse, CreatedResponse, FieldError,
    MessageResponse, ValidationErrorResponse,
};
