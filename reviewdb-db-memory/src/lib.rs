//! Volatile review storage that lives as long as the process.

use std::collections::HashMap;

use parking_lot::RwLock;
use reviewdb_core::{
    entities::*,
    repositories::{Error as RepoError, ReviewRepo},
};

type Result<T> = std::result::Result<T, RepoError>;

/// Keeps one append-only list of reviews per kind.
///
/// Appends take the write lock, so concurrent requests
/// never lose reviews. Ids start at 1 for every kind.
#[derive(Debug, Default)]
pub struct InMemoryReviewStore {
    reviews: RwLock<HashMap<ReviewKind, Vec<Review>>>,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReviewRepo for InMemoryReviewStore {
    fn create_review(&self, new_review: NewReview) -> Result<Review> {
        let mut reviews = self.reviews.write();
        let reviews = reviews.entry(new_review.kind).or_default();
        let id = ReviewId::new(reviews.len() as i64 + 1);
        let review = new_review.into_review(id);
        reviews.push(review.clone());
        log::trace!("Stored {} review #{id} in memory", review.kind);
        Ok(review)
    }

    fn all_reviews(&self, kind: ReviewKind) -> Result<Vec<Review>> {
        Ok(self
            .reviews
            .read()
            .get(&kind)
            .cloned()
            .unwrap_or_default())
    }

    fn load_reviews_of_subject(&self, kind: ReviewKind, subject_id: SubjectId) -> Result<Vec<Review>> {
        Ok(self
            .reviews
            .read()
            .get(&kind)
            .map(|reviews| {
                reviews
                    .iter()
                    .filter(|r| r.subject_id == subject_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn count_reviews(&self, kind: ReviewKind) -> Result<usize> {
        Ok(self.reviews.read().get(&kind).map(Vec::len).unwrap_or(0))
    }
}
