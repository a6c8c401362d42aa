use super::prelude::*;

pub fn load_reviews<R>(repo: &R, kind: ReviewKind) -> Result<Vec<Review>>
where
    R: ReviewRepo + ?Sized,
{
    Ok(repo.all_reviews(kind)?)
}

pub fn load_reviews_of_subject<R>(
    repo: &R,
    kind: ReviewKind,
    subject_id: SubjectId,
) -> Result<Vec<Review>>
where
    R: ReviewRepo + ?Sized,
{
    let reviews = repo.load_reviews_of_subject(kind, subject_id)?;
    debug_assert!(reviews.iter().all(|r| r.subject_id == subject_id));
    debug_assert!(reviews.iter().all(|r| r.kind == kind));
    Ok(reviews)
}

pub fn count_reviews<R>(repo: &R, kind: ReviewKind) -> Result<usize>
where
    R: ReviewRepo + ?Sized,
{
    Ok(repo.count_reviews(kind)?)
}

#[cfg(test)]
mod tests {

    use super::super::{tests::MockDb, *};
    use super::*;

    fn add(db: &MockDb, kind: ReviewKind, subject_id: i64, comment: &str) -> Review {
        add_review(
            db,
            RateSubject {
                kind,
                subject_id: subject_id.into(),
                author_id: 1.into(),
                comment: comment.into(),
                rating: 4,
            },
        )
        .unwrap()
    }

    #[test]
    fn load_all_reviews_of_kind_in_insertion_order() {
        let db = MockDb::default();
        assert!(load_reviews(&db, ReviewKind::Product).unwrap().is_empty());
        add(&db, ReviewKind::Product, 1, "first");
        add(&db, ReviewKind::Service, 1, "other kind");
        add(&db, ReviewKind::Product, 2, "second");
        let comments: Vec<_> = load_reviews(&db, ReviewKind::Product)
            .unwrap()
            .into_iter()
            .map(|r| r.comment)
            .collect();
        assert_eq!(comments, ["first", "second"]);
        assert_eq!(count_reviews(&db, ReviewKind::Product).unwrap(), 2);
        assert_eq!(count_reviews(&db, ReviewKind::Service).unwrap(), 1);
        assert_eq!(count_reviews(&db, ReviewKind::Team).unwrap(), 0);
    }

    #[test]
    fn filter_by_subject() {
        let db = MockDb::default();
        let r1 = add(&db, ReviewKind::Product, 1, "Product 1 review");
        let r2 = add(&db, ReviewKind::Product, 1, "Another Product 1 review");
        let r3 = add(&db, ReviewKind::Product, 2, "Product 2 review");
        assert_eq!(
            load_reviews_of_subject(&db, ReviewKind::Product, 1.into()).unwrap(),
            vec![r1, r2]
        );
        assert_eq!(
            load_reviews_of_subject(&db, ReviewKind::Product, 2.into()).unwrap(),
            vec![r3]
        );
        assert!(load_reviews_of_subject(&db, ReviewKind::Service, 1.into())
            .unwrap()
            .is_empty());
    }
}
