//! RBAC admin - request and error layer of an admin console
//!
//! This crate provides the records, request/response shapes, ordered
//! validators and sentinel errors for users, roles, menus, departments,
//! dictionaries, parameters, posts and the login/operation logs.

pub mod config;
pub mod dto;
pub mod entity;
pub mod error;
pub mod permission;
pub mod response;
pub mod tree;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult, Domain, Sentinel};
pub use response::ApiResponse;
pub use validation::Validate;
