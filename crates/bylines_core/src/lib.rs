//! Core domain logic for Bylines.
//! This crate is the single source of truth for the author/magazine/article
//! relationship and its invariants.

pub mod logging;
pub mod model;
pub mod registry;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::article::Article;
pub use model::author::Author;
pub use model::ids::{ArticleId, AuthorId, EntityKind, EntityRef, MagazineId};
pub use model::magazine::Magazine;
pub use model::validation::{ValidationError, MAGAZINE_NAME_LENGTH, TITLE_LENGTH};
pub use registry::{reset_catalog, with_catalog, GlobalCatalog};
pub use repo::catalog_repo::{
    CatalogRepository, InMemoryCatalogRepository, RepoError, RepoResult,
};
pub use service::catalog_service::CatalogService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
