use reviewdb_core::{
    entities::*,
    repositories::{Error as RepoError, ReviewRepo},
};
use reviewdb_entities::builders::*;

use super::*;

fn setup() -> Connections {
    let connections = Connections::init(":memory:", 1).unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    connections
}

fn new_review(kind: ReviewKind, subject: i64, rating: i64) -> NewReview {
    NewReview::build()
        .kind(kind)
        .subject(subject)
        .author(42)
        .comment("Great!")
        .rating(rating)
        .created_at(Timestamp::from_millis(1_700_000_000_123))
        .finish()
}

#[test]
fn create_and_load_reviews() {
    let db = setup();
    assert!(db.all_reviews(ReviewKind::Product).unwrap().is_empty());
    let r1 = db.create_review(new_review(ReviewKind::Product, 1, 3)).unwrap();
    let r2 = db.create_review(new_review(ReviewKind::Product, 2, 5)).unwrap();
    let r3 = db.create_review(new_review(ReviewKind::Product, 1, 2)).unwrap();
    assert_eq!(r1.id, ReviewId::new(1));
    assert_eq!(r2.id, ReviewId::new(2));
    assert_eq!(r3.id, ReviewId::new(3));
    assert_eq!(
        db.all_reviews(ReviewKind::Product).unwrap(),
        vec![r1.clone(), r2.clone(), r3.clone()]
    );
    assert_eq!(
        db.load_reviews_of_subject(ReviewKind::Product, 1.into())
            .unwrap(),
        vec![r1, r3]
    );
    assert_eq!(
        db.load_reviews_of_subject(ReviewKind::Product, 2.into())
            .unwrap(),
        vec![r2]
    );
    assert_eq!(db.count_reviews(ReviewKind::Product).unwrap(), 3);
}

#[test]
fn preserve_all_fields() {
    let db = setup();
    let created = db.create_review(new_review(ReviewKind::Team, 9, 4)).unwrap();
    let loaded = db.all_reviews(ReviewKind::Team).unwrap();
    assert_eq!(loaded.len(), 1);
    let loaded = &loaded[0];
    assert_eq!(loaded, &created);
    assert_eq!(loaded.kind, ReviewKind::Team);
    assert_eq!(loaded.subject_id, 9.into());
    assert_eq!(loaded.author_id, 42.into());
    assert_eq!(loaded.comment, "Great!");
    assert_eq!(u8::from(loaded.rating), 4);
    assert_eq!(loaded.created_at.as_millis(), 1_700_000_000_123);
}

#[test]
fn kinds_are_stored_separately() {
    let db = setup();
    db.create_review(new_review(ReviewKind::Product, 1, 5)).unwrap();
    let s = db.create_review(new_review(ReviewKind::Service, 1, 1)).unwrap();
    assert_eq!(s.id, ReviewId::new(1));
    assert_eq!(db.count_reviews(ReviewKind::Product).unwrap(), 1);
    assert_eq!(db.count_reviews(ReviewKind::Service).unwrap(), 1);
    assert_eq!(db.count_reviews(ReviewKind::Team).unwrap(), 0);
    assert!(db
        .load_reviews_of_subject(ReviewKind::Team, 1.into())
        .unwrap()
        .is_empty());
}

#[test]
fn roll_back_failed_transactions() {
    let db = setup();
    let err = db
        .exclusive()
        .unwrap()
        .transaction(|conn| {
            conn.create_review(new_review(ReviewKind::Product, 1, 3))?;
            Err::<(), _>(RepoError::NotFound)
        })
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
    assert_eq!(db.count_reviews(ReviewKind::Product).unwrap(), 0);
}

#[test]
fn reject_invalid_ratings_in_database() {
    let db = setup();
    use diesel::connection::SimpleConnection as _;
    let result = db
        .exclusive()
        .unwrap()
        .sqlite_conn()
        .batch_execute(
            "INSERT INTO product_review (subject_id, author_id, comment, rating) VALUES (1, 1, '', 6)",
        );
    assert!(result.is_err());
}

#[test]
fn default_creation_time() {
    let db = setup();
    use diesel::connection::SimpleConnection as _;
    let before = Timestamp::now().as_secs() * 1000;
    db.exclusive()
        .unwrap()
        .sqlite_conn()
        .batch_execute(
            "INSERT INTO service_review (subject_id, author_id, rating) VALUES (3, 1, 4)",
        )
        .unwrap();
    let reviews = db.all_reviews(ReviewKind::Service).unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].comment, "");
    assert!(reviews[0].created_at.as_millis() >= before);
    assert!(reviews[0].created_at.as_millis() <= Timestamp::now().as_millis());
}
