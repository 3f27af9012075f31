use bylines_core::{
    Author, CatalogService, EntityKind, InMemoryCatalogRepository, Magazine, RepoError,
    ValidationError,
};

fn new_service() -> CatalogService<InMemoryCatalogRepository> {
    CatalogService::new(InMemoryCatalogRepository::new())
}

#[test]
fn add_article_registers_once_in_author_magazine_and_global_lists() {
    let mut service = new_service();
    let author = service.create_author("Ada").unwrap();
    let magazine = service.create_magazine("CodeToday", "Tech").unwrap();

    let article = service
        .add_article(author, magazine, "Valid Title")
        .expect("valid article should be created");

    assert_eq!(article.title(), "Valid Title");
    assert_eq!(article.author_id(), author);
    assert_eq!(article.magazine_id(), magazine);

    let by_author = service.author_articles(author).unwrap();
    assert_eq!(by_author.len(), 1);
    assert_eq!(by_author[0].id(), article.id());

    let by_magazine = service.magazine_articles(magazine).unwrap();
    assert_eq!(by_magazine.len(), 1);
    assert_eq!(by_magazine[0].id(), article.id());

    let global = service.all_articles();
    assert_eq!(global.len(), 1);
    assert_eq!(global[0].id(), article.id());
}

#[test]
fn title_length_boundaries() {
    let mut service = new_service();
    let author = service.create_author("Ada").unwrap();
    let magazine = service.create_magazine("CodeToday", "Tech").unwrap();

    for length in [4, 51] {
        let err = service
            .create_article(author, magazine, "t".repeat(length))
            .expect_err("out-of-range title must be rejected");
        assert_eq!(
            err,
            RepoError::Validation(ValidationError::InvalidTitle { length })
        );
    }

    for length in [5, 50] {
        service
            .create_article(author, magazine, "t".repeat(length))
            .expect("boundary title should be accepted");
    }
    assert_eq!(service.all_articles().len(), 2);
}

#[test]
fn unregistered_author_or_magazine_is_rejected() {
    let mut service = new_service();
    let author = service.create_author("Ada").unwrap();
    let magazine = service.create_magazine("CodeToday", "Tech").unwrap();
    let stray_author = Author::new("Ghost").unwrap();
    let stray_magazine = Magazine::new("Nowhere", "Void").unwrap();

    let err = service
        .create_article(stray_author.id(), magazine, "Valid Title")
        .expect_err("unknown author must be rejected");
    assert_eq!(
        err,
        RepoError::Validation(ValidationError::InvalidAuthor(stray_author.id()))
    );

    let err = service
        .create_article(author, stray_magazine.id(), "Valid Title")
        .expect_err("unknown magazine must be rejected");
    assert_eq!(
        err,
        RepoError::Validation(ValidationError::InvalidMagazine(stray_magazine.id()))
    );

    assert!(service.all_articles().is_empty());
    assert!(service.author_articles(author).unwrap().is_empty());
}

#[test]
fn author_is_checked_before_title() {
    let mut service = new_service();
    let magazine = service.create_magazine("CodeToday", "Tech").unwrap();
    let stray_author = Author::new("Ghost").unwrap();

    let err = service
        .create_article(stray_author.id(), magazine, "bad")
        .expect_err("both author and title are invalid");
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::InvalidAuthor(_))
    ));
}

#[test]
fn entity_construction_validates_fields() {
    assert_eq!(
        Author::new("").unwrap_err(),
        ValidationError::InvalidName {
            entity: EntityKind::Author,
            length: 0,
        }
    );

    for name in ["x", "abcdefghijklmnopq"] {
        let err = Magazine::new(name, "Tech").expect_err("name out of range");
        assert!(matches!(
            err,
            ValidationError::InvalidName {
                entity: EntityKind::Magazine,
                ..
            }
        ));
    }
    Magazine::new("ab", "Tech").expect("2-char name should be accepted");
    Magazine::new("abcdefghijklmnop", "Tech").expect("16-char name should be accepted");

    assert_eq!(
        Magazine::new("CodeToday", "").unwrap_err(),
        ValidationError::InvalidCategory
    );
}

#[test]
fn rejected_magazine_create_registers_nothing() {
    let mut service = new_service();
    let err = service
        .create_magazine("x", "Tech")
        .expect_err("short name must be rejected");
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(service.all_magazines().is_empty());
}
