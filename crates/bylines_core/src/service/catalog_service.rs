//! Catalog use-case service.
//!
//! # Responsibility
//! - Create authors, magazines and articles through validated paths.
//! - Answer derived queries (distinct magazines, contributors, top publisher).
//!
//! # Invariants
//! - Article creation checks author, then magazine, then title.
//! - "Distinct" results are keyed by entity id; their order follows first
//!   appearance but is not part of the contract.
//! - Empty results that carry meaning are returned as `None`, not as an empty
//!   collection.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::ids::{ArticleId, AuthorId, EntityRef, MagazineId};
use crate::model::magazine::Magazine;
use crate::model::validation::ValidationError;
use crate::repo::catalog_repo::{CatalogRepository, RepoError, RepoResult};
use log::{debug, info, warn};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Minimum number of articles in one magazine, exclusive, for an author to
/// count as a contributing author.
const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// Use-case facade over a catalog repository.
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new author.
    pub fn create_author(&mut self, name: impl Into<String>) -> RepoResult<AuthorId> {
        let author = Author::new(name).map_err(|err| log_rejected("author_create", err))?;
        let id = self.repo.insert_author(author)?;
        debug!("event=author_create module=catalog status=ok author_id={id}");
        Ok(id)
    }

    /// Registers a new magazine.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> RepoResult<MagazineId> {
        let magazine = Magazine::new(name, category)
            .map_err(|err| log_rejected("magazine_create", err))?;
        let id = self.repo.insert_magazine(magazine)?;
        debug!("event=magazine_create module=catalog status=ok magazine_id={id}");
        Ok(id)
    }

    /// Creates and registers an article linking `author_id` and `magazine_id`.
    ///
    /// # Errors
    /// - `InvalidAuthor` / `InvalidMagazine` when a link is not registered.
    /// - `InvalidTitle` when the title is outside 5..=50 chars.
    pub fn create_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> RepoResult<ArticleId> {
        let article = {
            let author = self.repo.author(author_id).ok_or_else(|| {
                log_rejected("article_create", ValidationError::InvalidAuthor(author_id))
            })?;
            let magazine = self.repo.magazine(magazine_id).ok_or_else(|| {
                log_rejected(
                    "article_create",
                    ValidationError::InvalidMagazine(magazine_id),
                )
            })?;
            Article::new(author, magazine, title)
                .map_err(|err| log_rejected("article_create", err))?
        };

        let id = self.repo.insert_article(article)?;
        debug!(
            "event=article_create module=catalog status=ok article_id={id} author_id={author_id} magazine_id={magazine_id}"
        );
        Ok(id)
    }

    /// Author convenience factory: writes a new article for `magazine_id`.
    ///
    /// Returns a snapshot of the registered article.
    pub fn add_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> RepoResult<Article> {
        let id = self.create_article(author_id, magazine_id, title)?;
        self.article(id).cloned()
    }

    pub fn author(&self, id: AuthorId) -> RepoResult<&Author> {
        self.repo
            .author(id)
            .ok_or(RepoError::NotFound(EntityRef::Author(id)))
    }

    pub fn magazine(&self, id: MagazineId) -> RepoResult<&Magazine> {
        self.repo
            .magazine(id)
            .ok_or(RepoError::NotFound(EntityRef::Magazine(id)))
    }

    pub fn article(&self, id: ArticleId) -> RepoResult<&Article> {
        self.repo
            .article(id)
            .ok_or(RepoError::NotFound(EntityRef::Article(id)))
    }

    /// Articles written by the author, in creation order.
    pub fn author_articles(&self, id: AuthorId) -> RepoResult<Vec<&Article>> {
        let author = self.author(id)?;
        Ok(self.resolve_articles(author.article_ids()))
    }

    /// Distinct magazines the author has written for.
    pub fn author_magazines(&self, id: AuthorId) -> RepoResult<Vec<&Magazine>> {
        let articles = self.author_articles(id)?;
        let mut seen = HashSet::new();
        Ok(articles
            .into_iter()
            .filter(|article| seen.insert(article.magazine_id()))
            .filter_map(|article| self.repo.magazine(article.magazine_id()))
            .collect())
    }

    /// Distinct categories of the author's magazines.
    ///
    /// Returns `None` when the author has no articles.
    pub fn author_topic_areas(&self, id: AuthorId) -> RepoResult<Option<BTreeSet<&str>>> {
        let topics: BTreeSet<&str> = self
            .author_magazines(id)?
            .into_iter()
            .map(Magazine::category)
            .collect();
        Ok((!topics.is_empty()).then_some(topics))
    }

    /// Renames a magazine. A rejected name leaves the current one in place.
    pub fn rename_magazine(&mut self, id: MagazineId, name: impl Into<String>) -> RepoResult<()> {
        let magazine = self
            .repo
            .magazine_mut(id)
            .ok_or(RepoError::NotFound(EntityRef::Magazine(id)))?;
        magazine
            .set_name(name)
            .map_err(|err| log_rejected("magazine_rename", err))?;
        debug!("event=magazine_rename module=catalog status=ok magazine_id={id}");
        Ok(())
    }

    /// Recategorizes a magazine. A rejected category leaves the current one in place.
    pub fn set_magazine_category(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> RepoResult<()> {
        let magazine = self
            .repo
            .magazine_mut(id)
            .ok_or(RepoError::NotFound(EntityRef::Magazine(id)))?;
        magazine
            .set_category(category)
            .map_err(|err| log_rejected("magazine_recategorize", err))?;
        debug!("event=magazine_recategorize module=catalog status=ok magazine_id={id}");
        Ok(())
    }

    /// Articles published in the magazine, in creation order.
    pub fn magazine_articles(&self, id: MagazineId) -> RepoResult<Vec<&Article>> {
        let magazine = self.magazine(id)?;
        Ok(self.resolve_articles(magazine.article_ids()))
    }

    /// Distinct authors who have published in the magazine.
    pub fn magazine_contributors(&self, id: MagazineId) -> RepoResult<Vec<&Author>> {
        let articles = self.magazine_articles(id)?;
        let mut seen = HashSet::new();
        Ok(articles
            .into_iter()
            .filter(|article| seen.insert(article.author_id()))
            .filter_map(|article| self.repo.author(article.author_id()))
            .collect())
    }

    /// Titles of the magazine's articles, or `None` when it has none.
    pub fn magazine_article_titles(&self, id: MagazineId) -> RepoResult<Option<Vec<&str>>> {
        let titles: Vec<&str> = self
            .magazine_articles(id)?
            .into_iter()
            .map(Article::title)
            .collect();
        Ok((!titles.is_empty()).then_some(titles))
    }

    /// Contributors with more than two articles in this magazine.
    ///
    /// Returns `None` when no contributor passes the threshold.
    pub fn magazine_contributing_authors(
        &self,
        id: MagazineId,
    ) -> RepoResult<Option<Vec<&Author>>> {
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in self.magazine_articles(id)? {
            *counts.entry(article.author_id()).or_default() += 1;
        }

        let contributing: Vec<&Author> = self
            .magazine_contributors(id)?
            .into_iter()
            .filter(|author| {
                counts.get(&author.id()).copied().unwrap_or_default()
                    > CONTRIBUTING_AUTHOR_THRESHOLD
            })
            .collect();
        Ok((!contributing.is_empty()).then_some(contributing))
    }

    /// Magazine with the most articles across the whole catalog.
    ///
    /// Returns `None` when no article exists. Ties go to the magazine
    /// registered first.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        if self.repo.articles().is_empty() {
            return None;
        }

        let mut top: Option<&Magazine> = None;
        for magazine in self.repo.magazines() {
            match top {
                Some(current) if current.article_count() >= magazine.article_count() => {}
                _ => top = Some(magazine),
            }
        }
        top
    }

    /// Every registered article, in creation order.
    pub fn all_articles(&self) -> &[Article] {
        self.repo.articles()
    }

    /// Every registered magazine, in creation order.
    pub fn all_magazines(&self) -> &[Magazine] {
        self.repo.magazines()
    }

    /// Every registered author, in creation order.
    pub fn all_authors(&self) -> &[Author] {
        self.repo.authors()
    }

    /// Renders `Article(title=..., author=..., magazine=...)`.
    pub fn describe_article(&self, id: ArticleId) -> RepoResult<String> {
        let article = self.article(id)?;
        let author = self.author(article.author_id())?;
        let magazine = self.magazine(article.magazine_id())?;
        Ok(format!(
            "Article(title={}, author={}, magazine={})",
            article.title(),
            author.name(),
            magazine.name()
        ))
    }

    /// Drops every registered entity.
    pub fn reset(&mut self) {
        let dropped = self.repo.articles().len();
        self.repo.clear();
        info!("event=catalog_reset module=catalog status=ok dropped_articles={dropped}");
    }

    fn resolve_articles(&self, ids: &[ArticleId]) -> Vec<&Article> {
        ids.iter().filter_map(|id| self.repo.article(*id)).collect()
    }
}

fn log_rejected(event: &str, err: ValidationError) -> ValidationError {
    warn!(
        "event={event} module=catalog status=error error_code={}",
        err.code()
    );
    err
}
