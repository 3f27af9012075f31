//! Catalog repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the author, magazine and article registries in creation order.
//! - Register articles into their author, their magazine and the global list.
//!
//! # Invariants
//! - `insert_article` validates both links before touching any list, so a
//!   failed insert leaves every registry unchanged.
//! - Every article listed by an author or magazine points back at it.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::ids::{ArticleId, AuthorId, EntityRef, MagazineId};
use crate::model::magazine::Magazine;
use crate::model::validation::ValidationError;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for catalog writes and id-based queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ValidationError),
    NotFound(EntityRef),
    Duplicate(EntityRef),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(entity) => write!(f, "{entity} not found"),
            Self::Duplicate(entity) => write!(f, "{entity} already registered"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::Duplicate(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Storage contract for the three entity registries.
pub trait CatalogRepository {
    fn insert_author(&mut self, author: Author) -> RepoResult<AuthorId>;
    fn insert_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId>;
    /// Registers `article` with its author, its magazine and the global list,
    /// in that order.
    fn insert_article(&mut self, article: Article) -> RepoResult<ArticleId>;
    fn author(&self, id: AuthorId) -> Option<&Author>;
    fn magazine(&self, id: MagazineId) -> Option<&Magazine>;
    fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine>;
    fn article(&self, id: ArticleId) -> Option<&Article>;
    fn authors(&self) -> &[Author];
    fn magazines(&self) -> &[Magazine];
    fn articles(&self) -> &[Article];
    /// Drops every registered entity.
    fn clear(&mut self);
}

/// Vector-backed catalog with id indexes.
#[derive(Debug, Default)]
pub struct InMemoryCatalogRepository {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
    author_index: HashMap<AuthorId, usize>,
    magazine_index: HashMap<MagazineId, usize>,
    article_index: HashMap<ArticleId, usize>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn insert_author(&mut self, author: Author) -> RepoResult<AuthorId> {
        let id = author.id();
        if self.author_index.contains_key(&id) {
            return Err(RepoError::Duplicate(EntityRef::Author(id)));
        }
        self.author_index.insert(id, self.authors.len());
        self.authors.push(author);
        Ok(id)
    }

    fn insert_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId> {
        let id = magazine.id();
        if self.magazine_index.contains_key(&id) {
            return Err(RepoError::Duplicate(EntityRef::Magazine(id)));
        }
        self.magazine_index.insert(id, self.magazines.len());
        self.magazines.push(magazine);
        Ok(id)
    }

    fn insert_article(&mut self, article: Article) -> RepoResult<ArticleId> {
        let id = article.id();
        let author_pos = *self
            .author_index
            .get(&article.author_id())
            .ok_or(ValidationError::InvalidAuthor(article.author_id()))?;
        let magazine_pos = *self
            .magazine_index
            .get(&article.magazine_id())
            .ok_or(ValidationError::InvalidMagazine(article.magazine_id()))?;
        if self.article_index.contains_key(&id) {
            return Err(RepoError::Duplicate(EntityRef::Article(id)));
        }

        self.authors[author_pos].push_article(id);
        self.magazines[magazine_pos].push_article(id);
        self.article_index.insert(id, self.articles.len());
        self.articles.push(article);
        Ok(id)
    }

    fn author(&self, id: AuthorId) -> Option<&Author> {
        self.author_index.get(&id).map(|pos| &self.authors[*pos])
    }

    fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazine_index.get(&id).map(|pos| &self.magazines[*pos])
    }

    fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        let pos = *self.magazine_index.get(&id)?;
        self.magazines.get_mut(pos)
    }

    fn article(&self, id: ArticleId) -> Option<&Article> {
        self.article_index.get(&id).map(|pos| &self.articles[*pos])
    }

    fn authors(&self) -> &[Author] {
        &self.authors
    }

    fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    fn articles(&self) -> &[Article] {
        &self.articles
    }

    fn clear(&mut self) {
        self.authors.clear();
        self.magazines.clear();
        self.articles.clear();
        self.author_index.clear();
        self.magazine_index.clear();
        self.article_index.clear();
    }
}
