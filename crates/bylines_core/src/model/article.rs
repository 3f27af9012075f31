//! Article join entity.
//!
//! # Invariants
//! - `title` length stays within `TITLE_LENGTH`.
//! - `title`, `author` and `magazine` never change after construction.
//! - Construction alone does not register the article; see
//!   `CatalogRepository::insert_article`.

use crate::model::author::Author;
use crate::model::ids::{ArticleId, AuthorId, MagazineId};
use crate::model::magazine::Magazine;
use crate::model::validation::{validate_title, ValidationError};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// One piece written by one author for one magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    id: ArticleId,
    title: String,
    author: AuthorId,
    magazine: MagazineId,
}

impl Article {
    /// Creates an article linking `author` and `magazine`.
    ///
    /// # Errors
    /// - `ValidationError::InvalidTitle` when `title` is outside 5..=50 chars.
    pub fn new(
        author: &Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(ArticleId::new(), author.id(), magazine.id(), title)
    }

    /// Creates an article from raw ids.
    ///
    /// Link targets are checked when the article is registered.
    pub fn with_id(
        id: ArticleId,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id,
            title,
            author,
            magazine,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author_id(&self) -> AuthorId {
        self.author
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine
    }
}

impl Display for Article {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Article(title={})", self.title)
    }
}
