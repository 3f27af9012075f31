use bylines_core::{Article, ArticleId, Author, AuthorId, Magazine, MagazineId};
use uuid::Uuid;

#[test]
fn entities_serialize_with_expected_fields() {
    let author_uuid = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let magazine_uuid = Uuid::parse_str("66666666-7777-4888-9999-aaaaaaaaaaaa").unwrap();
    let article_uuid = Uuid::parse_str("bbbbbbbb-cccc-4ddd-8eee-ffffffffffff").unwrap();

    let author = Author::with_id(AuthorId::from_uuid(author_uuid), "Ada").unwrap();
    let magazine =
        Magazine::with_id(MagazineId::from_uuid(magazine_uuid), "CodeToday", "Tech").unwrap();
    let article = Article::with_id(
        ArticleId::from_uuid(article_uuid),
        author.id(),
        magazine.id(),
        "Intro to Systems",
    )
    .unwrap();

    let json = serde_json::to_value(&article).unwrap();
    assert_eq!(json["id"], article_uuid.to_string());
    assert_eq!(json["title"], "Intro to Systems");
    assert_eq!(json["author"], author_uuid.to_string());
    assert_eq!(json["magazine"], magazine_uuid.to_string());

    let json = serde_json::to_value(&magazine).unwrap();
    assert_eq!(json["name"], "CodeToday");
    assert_eq!(json["category"], "Tech");
    assert_eq!(json["articles"], serde_json::json!([]));

    let json = serde_json::to_value(&author).unwrap();
    assert_eq!(json["name"], "Ada");
}

#[test]
fn entities_render_like_their_constructors() {
    let author = Author::new("Ada").unwrap();
    let magazine = Magazine::new("CodeToday", "Tech").unwrap();
    let article = Article::new(&author, &magazine, "Intro to Systems").unwrap();

    assert_eq!(author.to_string(), "Author(name=Ada)");
    assert_eq!(magazine.to_string(), "Magazine(name=CodeToday, category=Tech)");
    assert_eq!(article.to_string(), "Article(title=Intro to Systems)");
}

#[test]
fn unregistered_article_leaves_link_lists_untouched() {
    let author = Author::new("Ada").unwrap();
    let magazine = Magazine::new("CodeToday", "Tech").unwrap();
    let _article = Article::new(&author, &magazine, "Intro to Systems").unwrap();

    assert!(author.article_ids().is_empty());
    assert_eq!(magazine.article_count(), 0);
}
