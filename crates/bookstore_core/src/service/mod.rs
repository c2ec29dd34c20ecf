//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the HTTP boundary decoupled from storage details.

pub mod author_service;
pub mod book_service;
pub mod comment_service;
pub mod user_service;
