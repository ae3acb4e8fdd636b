//! # Blog Core
//!
//! The domain layer of the blog post service.
//! This crate contains the entity, its repository port and error types, with
//! zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{RepoError, RepoOperation};
