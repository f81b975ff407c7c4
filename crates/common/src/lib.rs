//! Shared utilities, configuration, and error handling for Bistro
//!
//! This crate provides common functionality used across the Bistro backend:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Request extractors (validated JSON, pagination)

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::{Pagination, ValidatedJson};
