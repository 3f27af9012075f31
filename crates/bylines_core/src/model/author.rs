//! Author entity.
//!
//! # Invariants
//! - `name` is non-empty and fixed after construction.
//! - `articles` only grows, and only through article registration.

use crate::model::ids::{ArticleId, AuthorId};
use crate::model::validation::{validate_author_name, ValidationError};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// A writer who can publish articles in any number of magazines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: AuthorId,
    name: String,
    /// Written articles in creation order.
    articles: Vec<ArticleId>,
}

impl Author {
    /// Creates an author with a generated id.
    ///
    /// # Errors
    /// - `ValidationError::InvalidName` when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(AuthorId::new(), name)
    }

    /// Creates an author with a caller-provided id.
    pub fn with_id(id: AuthorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_author_name(&name)?;
        Ok(Self {
            id,
            name,
            articles: Vec::new(),
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of written articles, oldest first.
    pub fn article_ids(&self) -> &[ArticleId] {
        &self.articles
    }

    pub(crate) fn push_article(&mut self, article_id: ArticleId) {
        self.articles.push(article_id);
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Author(name={})", self.name)
    }
}
