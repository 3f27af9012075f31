//! Catalog use-case services.
//!
//! # Responsibility
//! - Expose entity-level operations and derived queries over a repository.
//! - Keep callers decoupled from how registries are stored.

pub mod catalog_service;
