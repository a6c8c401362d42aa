// Low-level storage access traits.
// A repository owns the review collections of all kinds.
// Reviews are only ever appended and never modified.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait ReviewRepo {
    /// Assigns an id and makes the review visible for subsequent reads.
    fn create_review(&self, review: NewReview) -> Result<Review>;

    // All reviews of the given kind in insertion order
    fn all_reviews(&self, kind: ReviewKind) -> Result<Vec<Review>>;

    fn load_reviews_of_subject(&self, kind: ReviewKind, subject_id: SubjectId) -> Result<Vec<Review>> {
        Ok(self
            .all_reviews(kind)?
            .into_iter()
            .filter(|r| r.subject_id == subject_id)
            .collect())
    }

    fn count_reviews(&self, kind: ReviewKind) -> Result<usize> {
        Ok(self.all_reviews(kind)?.len())
    }
}
